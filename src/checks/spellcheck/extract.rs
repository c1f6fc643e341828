//! Natural-language extraction per filetype
//!
//! Only the text a human reads is handed to the speller: comment trivia for
//! Swift sources, prose outside fenced code blocks for markdown.

use std::path::Path;

/// Which extractor applies to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
  Swift,
  Markdown,
  /// Recognized extension without a registered extractor
  Unsupported(String),
  /// No extension at all; silently skipped
  Skip,
}

/// Pick the extractor for a path by its (lowercased) extension
pub fn kind_for(path: &Path) -> Kind {
  let Some(ext) = path.extension() else {
    return Kind::Skip;
  };
  let ext = ext.to_string_lossy().to_lowercase();
  match ext.as_str() {
    "swift" => Kind::Swift,
    "md" => Kind::Markdown,
    "" => Kind::Skip,
    other => Kind::Unsupported(other.to_string()),
  }
}

/// Extract comment trivia from Swift source
///
/// Returns every line and block comment (doc variants included) as one unit
/// each. The scanner is string-literal aware so `//` inside a literal is
/// never treated as a comment.
pub fn swift_comments(content: &str) -> Vec<String> {
  let mut comments = Vec::new();
  let bytes = content.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    match bytes[i] {
      b'/' if bytes.get(i + 1) == Some(&b'/') => {
        let start = i;
        while i < bytes.len() && bytes[i] != b'\n' {
          i += 1;
        }
        comments.push(content[start..i].to_string());
      }
      b'/' if bytes.get(i + 1) == Some(&b'*') => {
        let start = i;
        let mut depth = 1;
        i += 2;
        // Swift block comments nest
        while i < bytes.len() && depth > 0 {
          if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'*') {
            depth += 1;
            i += 2;
          } else if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
            depth -= 1;
            i += 2;
          } else {
            i += 1;
          }
        }
        comments.push(content[start..i].to_string());
      }
      b'"' => {
        // Skip string literals, including multiline """ ... """
        if bytes.get(i + 1) == Some(&b'"') && bytes.get(i + 2) == Some(&b'"') {
          i += 3;
          while i < bytes.len() {
            if bytes[i] == b'"' && bytes.get(i + 1) == Some(&b'"') && bytes.get(i + 2) == Some(&b'"') {
              i += 3;
              break;
            }
            i += 1;
          }
        } else {
          i += 1;
          while i < bytes.len() && bytes[i] != b'"' && bytes[i] != b'\n' {
            if bytes[i] == b'\\' {
              i += 1;
            }
            i += 1;
          }
          i += 1;
        }
      }
      _ => i += 1,
    }
  }

  comments
}

/// Extract prose from markdown, excluding fenced code blocks
///
/// The file is split on the triple-backtick delimiter and only even-indexed
/// segments are kept, so everything between a pair of fences is dropped.
pub fn markdown_prose(content: &str) -> Vec<String> {
  content
    .split("```")
    .enumerate()
    .filter(|(index, _)| index % 2 == 0)
    .flat_map(|(_, segment)| segment.lines())
    .filter(|line| !line.trim().is_empty())
    .map(str::to_string)
    .collect()
}
