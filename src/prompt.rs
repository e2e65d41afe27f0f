//! Assembling the full image prompt and saving it alongside the images.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IllustrateError;
use crate::inputs::InputTexts;

/// Concatenates pre-prompt, body and post-prompt, newline-separated.
pub fn assemble(inputs: &InputTexts) -> String {
    format!(
        "{}\n{}\n{}",
        inputs.pre_prompt, inputs.body, inputs.post_prompt
    )
}

/// Writes the assembled prompt to `<base>.txt` in `dir`, creating or
/// truncating the file. A write failure aborts the run.
pub fn save_prompt(dir: &Path, base: &str, prompt: &str) -> Result<PathBuf, IllustrateError> {
    let path = dir.join(format!("{base}.txt"));
    fs::write(&path, prompt).map_err(|err| IllustrateError::FileWrite(path.clone(), err))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> InputTexts {
        InputTexts {
            body: "a fox in the snow".into(),
            pre_prompt: "An oil painting of".into(),
            post_prompt: "in the style of the old masters".into(),
        }
    }

    #[test]
    fn test_assemble_exact_concatenation() {
        assert_eq!(
            assemble(&sample_inputs()),
            "An oil painting of\na fox in the snow\nin the style of the old masters"
        );
    }

    #[test]
    fn test_save_prompt_bytes_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = assemble(&sample_inputs());
        let path = save_prompt(dir.path(), "20260307-090542-fox", &prompt).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "20260307-090542-fox.txt"
        );
        assert_eq!(std::fs::read(&path).unwrap(), prompt.as_bytes());
    }
}
