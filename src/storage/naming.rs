/// Width of the zero-padded partition index.
pub const INDEX_WIDTH: usize = 3;
/// Largest partition count whose indices still sort lexicographically.
pub const MAX_PARTITIONS: usize = 1000;

pub const DEFAULT_PREFIX: &str = "part_";
pub const DEFAULT_EXTENSION: &str = "csv";

/// Naming pattern shared by the splitter and the loader: `<prefix><NNN>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNaming {
    prefix: String,
    extension: String
}

impl PartitionNaming {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into().trim_start_matches('.').to_string()
        }
    }

    pub fn file_name(&self, index: usize) -> String {
        format!("{}{:0width$}.{}", self.prefix, index, self.extension, width = INDEX_WIDTH)
    }

    /// True for names of the form `<prefix><exactly INDEX_WIDTH digits>.<extension>`.
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(rest) = file_name.strip_prefix(self.prefix.as_str()) else {
            return false;
        };

        let Some(index) = rest.strip_suffix(self.extension.as_str()).and_then(|rest| rest.strip_suffix('.')) else {
            return false;
        };

        index.len() == INDEX_WIDTH && index.bytes().all(|byte| byte.is_ascii_digit())
    }
}

impl Default for PartitionNaming {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_EXTENSION)
    }
}
