//! Prompt assembly.
//!
//! Concatenates accepted files into one text blob: a header line naming the
//! project, then one delimited block per file in admission order. Framing is
//! idempotent — `split_prompt` reconstructs the ordered (path, content)
//! pairs from a built blob exactly.

use reviewclaw_core::file::AcceptedFile;

pub const FILE_DELIM_OPEN: &str = "===== FILE: ";
pub const FILE_DELIM_CLOSE: &str = "===== END FILE: ";
pub const FILE_DELIM_SUFFIX: &str = " =====";

/// The fixed review rubric, carried on the service's system-instruction
/// side channel rather than inline in the prompt.
pub const REVIEW_RUBRIC: &str = "\
You are an expert software engineer performing a thorough code review of an \
entire project. The user message contains the project's files, each wrapped \
in FILE delimiters carrying its relative path.

Review the project across these dimensions:

1. **Architecture** — overall structure, separation of concerns, module \
boundaries, and how well the pieces fit together.
2. **Consistency** — naming, formatting, and idiom consistency across files.
3. **Correctness** — bugs, logic errors, unhandled edge cases, and race \
conditions.
4. **Security** — injection risks, secret handling, unsafe input processing, \
and dependency exposure.
5. **Performance** — algorithmic inefficiencies, unnecessary allocations or \
I/O, and obvious hot-path problems.
6. **UI/UX** — where user-facing code exists, clarity and robustness of the \
interaction flows.
7. **Suggestions** — concrete, prioritized improvements with short examples \
where useful.
8. **Dependencies** — unused, outdated, or risky third-party dependencies.
9. **Documentation** — READMEs, comments, and anything a new contributor \
would miss.

Format the review as Markdown with a section per dimension. Be specific: \
reference files by their relative paths. Lead with a short overall summary.";

/// Build the single text blob for one review request.
pub fn build_prompt(project_name: &str, files: &[AcceptedFile]) -> String {
    let mut blob = format!("Project under review: \"{project_name}\"\n\n");
    for file in files {
        blob.push_str(FILE_DELIM_OPEN);
        blob.push_str(&file.path);
        blob.push_str(FILE_DELIM_SUFFIX);
        blob.push('\n');
        blob.push_str(&file.content);
        blob.push('\n');
        blob.push_str(FILE_DELIM_CLOSE);
        blob.push_str(&file.path);
        blob.push_str(FILE_DELIM_SUFFIX);
        blob.push_str("\n\n");
    }
    blob
}

/// Split a built blob back into its ordered (path, content) pairs.
///
/// The round-trip guarantee holds for well-formed blobs only: a file whose
/// content itself contains a line equal to its own closing delimiter is cut
/// short at that line.
pub fn split_prompt(blob: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut rest = blob;

    while let Some(start) = rest.find(FILE_DELIM_OPEN) {
        let after_open = &rest[start + FILE_DELIM_OPEN.len()..];
        let Some(line_end) = after_open.find('\n') else {
            break;
        };
        let Some(path) = after_open[..line_end].strip_suffix(FILE_DELIM_SUFFIX) else {
            break;
        };

        let body = &after_open[line_end + 1..];
        let close = format!("\n{FILE_DELIM_CLOSE}{path}{FILE_DELIM_SUFFIX}");
        let Some(end) = body.find(&close) else {
            break;
        };

        pairs.push((path.to_string(), body[..end].to_string()));
        rest = &body[end + close.len()..];
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> AcceptedFile {
        AcceptedFile {
            path: path.into(),
            content: content.into(),
        }
    }

    #[test]
    fn header_names_the_project() {
        let blob = build_prompt("my-app", &[]);
        assert!(blob.starts_with("Project under review: \"my-app\"\n"));
    }

    #[test]
    fn files_appear_in_order_with_delimiters() {
        let blob = build_prompt(
            "demo",
            &[file("src/a.ts", "let a = 1;"), file("README", "# demo")],
        );

        let a = blob.find("===== FILE: src/a.ts =====").unwrap();
        let b = blob.find("===== FILE: README =====").unwrap();
        assert!(a < b);
        assert!(blob.contains("===== END FILE: src/a.ts ====="));
        assert!(blob.contains("let a = 1;"));
    }

    #[test]
    fn round_trip_reconstructs_pairs_exactly() {
        let files = vec![
            file("src/a.ts", "export const a = 1;"),
            file("src/b.rs", "fn b() -> u8 {\n    2\n}\n"),
            file("README", "# project\n\nwith blank lines"),
        ];
        let blob = build_prompt("demo", &files);

        let pairs = split_prompt(&blob);
        assert_eq!(pairs.len(), 3);
        for (original, (path, content)) in files.iter().zip(&pairs) {
            assert_eq!(*path, original.path);
            assert_eq!(*content, original.content);
        }
    }

    #[test]
    fn round_trip_preserves_multibyte_content() {
        let files = vec![file("docs/notes.md", "héllo — ünïcode ✓")];
        let pairs = split_prompt(&build_prompt("demo", &files));
        assert_eq!(pairs[0].1, "héllo — ünïcode ✓");
    }

    #[test]
    fn content_colliding_with_own_close_delimiter_is_cut_short() {
        let collision = "text\n===== END FILE: a.md =====\ntail";
        let blob = build_prompt("demo", &[file("a.md", collision)]);

        let pairs = split_prompt(&blob);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "a.md");
        // The embedded delimiter line ends the block early.
        assert_eq!(pairs[0].1, "text");
    }

    #[test]
    fn empty_file_list_produces_header_only() {
        let blob = build_prompt("demo", &[]);
        assert!(split_prompt(&blob).is_empty());
    }

    #[test]
    fn rubric_covers_all_dimensions() {
        for dimension in [
            "Architecture",
            "Consistency",
            "Correctness",
            "Security",
            "Performance",
            "UI/UX",
            "Suggestions",
            "Dependencies",
            "Documentation",
        ] {
            assert!(REVIEW_RUBRIC.contains(dimension), "missing {dimension}");
        }
    }
}
