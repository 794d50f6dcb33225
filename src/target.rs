#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    name: String,
    libraries: Vec<String>,
    stamped: bool,
}

impl Target {
    pub fn new(name: impl Into<String>, libraries: Vec<String>, stamped: bool) -> Self {
        Self {
            name: name.into(),
            libraries,
            stamped,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extra library sources linked into the test binary.
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Whether the source carries a hand-in date header.
    pub fn stamped(&self) -> bool {
        self.stamped
    }

    pub fn source(&self) -> String {
        format!("{}.c", self.name)
    }

    pub fn binary(&self) -> String {
        format!("{}test", self.name)
    }
}

pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("mtftable", vec!["lib/dlist.c".into()], true),
        Target::new("arraytable", vec!["lib/array_1d.c".into()], true),
        Target::new("table", vec!["lib/dlist.c".into()], false),
    ]
}
