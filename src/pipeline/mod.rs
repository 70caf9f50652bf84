pub mod stage1_fetch;
pub mod stage2_reduce;
pub mod stage3_report;
