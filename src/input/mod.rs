pub mod decode;
pub mod query;
pub mod transport;

pub const DEFAULT_BASE_URL: &str =
    "https://api.opentargets.io/v3/platform/public/association/filter";

/// What a single invocation does, decided once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    Target(String),
    Disease(String),
    SelfTest,
}
