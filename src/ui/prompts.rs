//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{ProvisionError, Result};

use super::{Prompt, PromptResult};

/// Convert dialoguer errors to ProvisionError.
fn map_dialoguer_err(e: dialoguer::Error) -> ProvisionError {
    ProvisionError::Io(e.into())
}

/// Prompt the user for one line of input.
///
/// An empty line is a valid answer for every prompt: a declined gate or a
/// missing interpreter path.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptType;

    fn make_prompt(key: &str, prompt_type: PromptType, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Test question?".to_string(),
            prompt_type,
            default: default.map(String::from),
        }
    }

    #[test]
    fn prompt_creation() {
        let prompt = make_prompt("test", PromptType::Input, Some("default"));
        assert_eq!(prompt.key, "test");
        assert_eq!(prompt.default, Some("default".to_string()));
    }

    #[test]
    fn prompt_type_gate_creation() {
        let prompt = make_prompt("install", PromptType::Gate, None);
        assert!(matches!(prompt.prompt_type, PromptType::Gate));
    }
}
