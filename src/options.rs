// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// `PREG_OFFSET_CAPTURE`
pub const PREG_OFFSET_CAPTURE: i64 = 256;

/// Describes where the pattern and flags live in the match call and which
/// flag bit requests offset capture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InferenceOptions {
    /// Position of the delimited pattern literal.
    pub pattern_argument: usize,
    /// Position of the flags integer. Absent arguments count as 0.
    pub flags_argument: usize,
    /// Bit tested against the flags integer.
    pub offset_capture_flag: i64,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            pattern_argument: 0,
            flags_argument: 3,
            offset_capture_flag: PREG_OFFSET_CAPTURE,
        }
    }
}

impl InferenceOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: InferenceOptions =
            serde_json::from_str(json).context("failed to parse inference options")?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.offset_capture_flag == 0 {
            bail!("offsetCaptureFlag must have at least one bit set");
        }
        if self.pattern_argument == self.flags_argument {
            bail!(
                "patternArgument and flagsArgument both refer to argument {}",
                self.pattern_argument
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() -> Result<()> {
        assert_eq!(InferenceOptions::from_json_str("{}")?, InferenceOptions::default());
        Ok(())
    }

    #[test]
    fn partial_override() -> Result<()> {
        let options = InferenceOptions::from_json_str(r#"{ "flagsArgument": 2 }"#)?;
        assert_eq!(options.flags_argument, 2);
        assert_eq!(options.pattern_argument, 0);
        assert_eq!(options.offset_capture_flag, PREG_OFFSET_CAPTURE);
        Ok(())
    }

    #[test]
    fn invalid_options() {
        for json in [
            r#"{ "offsetCaptureFlag": 0 }"#,
            r#"{ "flagsArgument": 0 }"#,
            r#"{ "unknown": true }"#,
            "[]",
        ] {
            assert!(InferenceOptions::from_json_str(json).is_err(), "{json}");
        }
    }
}
