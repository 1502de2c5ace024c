/// Static metadata describing a use case.
///
/// Mirrors the `aNNN` aggregate numbering: use cases are `uNNN` and the
/// index doubles as their API route prefix.
pub trait UseCaseMetadata {
    fn usecase_index() -> &'static str;
    fn usecase_name() -> &'static str;
    fn display_name() -> &'static str;
    fn description() -> &'static str;
}
