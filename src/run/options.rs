#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub skip_leak_check: bool,
    pub skip_stamp: bool,
}
