use super::{CmdMessage, CmdResult, TemplateEntry};
use crate::store::{ScanFailure, TemplateStore};

pub fn run(store: &TemplateStore, failures: &[ScanFailure]) -> CmdResult {
    let entries: Vec<TemplateEntry> = store
        .list()
        .into_iter()
        .map(|(key, description)| TemplateEntry {
            key: key.to_string(),
            description: description.to_string(),
        })
        .collect();

    let mut result = CmdResult::default().with_listed_templates(entries);

    for failure in failures {
        result.add_message(CmdMessage::error(format!(
            "Failed to load {}: {}",
            failure.path.display(),
            failure.error
        )));
    }

    if store.is_empty() {
        result.add_message(CmdMessage::info("No commands available."));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::CommandTemplate;
    use std::path::PathBuf;

    #[test]
    fn test_list_entries() {
        let store: TemplateStore = vec![
            (
                "commands/b.json".to_string(),
                CommandTemplate::new("true").with_description("Second"),
            ),
            ("commands/a.json".to_string(), CommandTemplate::new("true")),
        ]
        .into_iter()
        .collect();

        let result = run(&store, &[]);
        assert_eq!(
            result.listed_templates,
            vec![
                TemplateEntry {
                    key: "commands/a.json".to_string(),
                    description: "no description".to_string(),
                },
                TemplateEntry {
                    key: "commands/b.json".to_string(),
                    description: "Second".to_string(),
                },
            ]
        );
        assert!(result.messages.is_empty());
        assert!(result.exit_code.is_none());
    }

    #[test]
    fn test_empty_store_is_not_an_error() {
        let result = run(&TemplateStore::new(), &[]);
        assert!(result.listed_templates.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No commands available.")]);
    }

    #[test]
    fn test_failures_are_reported() {
        let store: TemplateStore = vec![("commands/ok.json".to_string(), CommandTemplate::new("true"))]
            .into_iter()
            .collect();
        let failures = vec![ScanFailure {
            path: PathBuf::from("commands/bad.json"),
            error: "expected value at line 1 column 1".to_string(),
        }];

        let result = run(&store, &failures);
        assert_eq!(result.listed_templates.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("bad.json"));
    }
}
