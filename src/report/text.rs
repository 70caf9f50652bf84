use crate::model::scores::NamedStatistic;
use crate::report::format_score;

/// One `label: value` line per statistic, each newline-terminated.
pub fn render_statistics(stats: &[NamedStatistic]) -> String {
    let mut out = String::new();
    for stat in stats {
        out.push_str(&format!("{}: {}\n", stat.label, format_score(stat.value)));
    }
    out
}
