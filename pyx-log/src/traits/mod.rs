use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only view of environment variables.
///
/// The logger consults this on every `debug` call, so the debug channel
/// can be toggled at runtime without touching the process environment.
pub trait EnvSource: Send + Sync {
    /// Returns the raw value of `key`, or `None` when it is not defined
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// A variable counts as set whenever it is defined, even if empty
    fn is_set(&self, key: &str) -> bool {
        self.var_os(key).is_some()
    }
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), OsString::from(value));
        self
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
