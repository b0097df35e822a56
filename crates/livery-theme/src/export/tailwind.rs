//! Static Tailwind-style config template referencing the theme variables.

use crate::tokens::COLOR_TOKENS;

/// Render a Tailwind-style config extending the framework palette with
/// the engine's CSS variables.
///
/// The template depends only on the known token vocabulary, never on
/// current values, so it is stable across theme edits.
pub fn tailwind_config() -> String {
    let mut colors = String::new();
    for token in COLOR_TOKENS {
        colors.push_str(&format!("        \"{token}\": \"var(--{token})\",\n"));
        colors.push_str(&format!(
            "        \"{token}-foreground\": \"var(--{token}-foreground)\",\n"
        ));
    }

    format!(
        "module.exports = {{
  theme: {{
    extend: {{
      colors: {{
{colors}      }},
      borderRadius: {{
        DEFAULT: \"var(--radius)\",
      }},
      fontFamily: {{
        sans: \"var(--font-sans)\",
      }},
    }},
  }},
}};
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_references_the_token_vocabulary() {
        let config = tailwind_config();
        assert!(config.contains("\"primary\": \"var(--primary)\""));
        assert!(config.contains("\"primary-foreground\": \"var(--primary-foreground)\""));
        assert!(config.contains("DEFAULT: \"var(--radius)\""));
    }

    #[test]
    fn template_is_static() {
        assert_eq!(tailwind_config(), tailwind_config());
    }
}
