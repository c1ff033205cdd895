use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::commands::COMMAND_NAMES;

/// Rustyline helper that completes slash commands and shows inline hints.
#[derive(Default)]
pub struct ReplHelper;

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Only the leading command word is completed.
        if !line.starts_with('/') || line[..pos].contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let prefix = &line[..pos];
        let candidates: Vec<Pair> = COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();

        Ok((0, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() || !line.starts_with('/') {
            return None;
        }
        if line.contains(' ') {
            return None;
        }

        COMMAND_NAMES
            .iter()
            .find(|name| name.starts_with(line) && name.len() > line.len())
            .map(|name| name[line.len()..].to_string())
    }
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    fn ctx_complete(line: &str, pos: usize) -> (usize, Vec<String>) {
        let helper = ReplHelper;
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = helper.complete(line, pos, &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_completes_command_prefix() {
        let (start, names) = ctx_complete("/an", 3);
        assert_eq!(start, 0);
        assert_eq!(names, vec!["/analyze".to_string()]);
    }

    #[test]
    fn test_no_completion_after_space() {
        let (_, names) = ctx_complete("/analyze Pro", 12);
        assert!(names.is_empty());
    }

    #[test]
    fn test_no_completion_without_slash() {
        let (_, names) = ctx_complete("list", 4);
        assert!(names.is_empty());
    }

    #[test]
    fn test_hint_suggests_suffix() {
        let helper = ReplHelper;
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        assert_eq!(helper.hint("/ro", 3, &ctx), Some("les".to_string()));
        assert_eq!(helper.hint("/roles", 6, &ctx), None);
        assert_eq!(helper.hint("", 0, &ctx), None);
    }
}
