//! Loading of the three working-directory text files.

use std::fs;
use std::path::Path;

use crate::constants::{INPUT_FILE, POST_PROMPT_FILE, PRE_PROMPT_FILE};
use crate::error::IllustrateError;

/// The three text fragments a run is built from, immutable once read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputTexts {
    /// The body text to summarize and illustrate.
    pub body: String,
    /// Fragment placed before the body in the image prompt.
    pub pre_prompt: String,
    /// Fragment placed after the body in the image prompt.
    pub post_prompt: String,
}

impl InputTexts {
    /// Reads `input.txt`, `pre-prompt.txt` and `post-prompt.txt` from `dir`.
    ///
    /// A missing or unreadable file is fatal; no network call has been made
    /// yet when this fails.
    pub fn load(dir: &Path) -> Result<Self, IllustrateError> {
        Ok(Self {
            body: read_file(&dir.join(INPUT_FILE))?,
            pre_prompt: read_file(&dir.join(PRE_PROMPT_FILE))?,
            post_prompt: read_file(&dir.join(POST_PROMPT_FILE))?,
        })
    }
}

/// Returns the full UTF-8 content of a file.
pub fn read_file(path: &Path) -> Result<String, IllustrateError> {
    fs::read_to_string(path).map_err(|err| IllustrateError::InputRead(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_body_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRE_PROMPT_FILE), "pre").unwrap();
        std::fs::write(dir.path().join(POST_PROMPT_FILE), "post").unwrap();

        let result = InputTexts::load(dir.path());
        assert!(matches!(result, Err(IllustrateError::InputRead(_, _))));
    }

    #[test]
    fn test_load_reads_all_three() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "a body").unwrap();
        std::fs::write(dir.path().join(PRE_PROMPT_FILE), "pre").unwrap();
        std::fs::write(dir.path().join(POST_PROMPT_FILE), "post").unwrap();

        let inputs = InputTexts::load(dir.path()).unwrap();
        assert_eq!(inputs.body, "a body");
        assert_eq!(inputs.pre_prompt, "pre");
        assert_eq!(inputs.post_prompt, "post");
    }
}
