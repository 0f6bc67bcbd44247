pub mod human;

use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Trait for command outputs that can be rendered in both human and JSON
/// formats.
pub trait CommandOutput: Serialize {
    fn human_display(&self) -> String;
}

/// Print a command output in the requested format.
pub fn print_output<T: CommandOutput>(output: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => human::success(&output.human_display()),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(output).expect("failed to serialize output")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Fake {
        count: usize,
    }

    impl CommandOutput for Fake {
        fn human_display(&self) -> String {
            format!("{} things", self.count)
        }
    }

    #[test]
    fn test_human_display() {
        let out = Fake { count: 3 };
        assert_eq!(out.human_display(), "3 things");
    }

    #[test]
    fn test_json_serialization() {
        let out = Fake { count: 3 };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn test_output_format_clone_copy() {
        let f = OutputFormat::Json;
        let f2 = f; // Copy
        assert!(matches!(f2, OutputFormat::Json));
    }
}
