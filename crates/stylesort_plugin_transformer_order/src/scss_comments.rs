use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
  Default,
  BlockComment,
  SingleQuote,
  DoubleQuote,
  Url,
  UrlSingleQuote,
  UrlDoubleQuote,
}

/// Rewrites `//` line comments out of a comment-extended stylesheet source
///
/// `//` inside block comments, quoted strings and unquoted url() tokens is
/// left alone. The line terminator ending a comment is preserved so line
/// numbers stay stable.
pub fn strip_line_comments(source: &str) -> Cow<'_, str> {
  if !source.contains("//") {
    return Cow::Borrowed(source);
  }

  let mut output = String::with_capacity(source.len());
  let mut chars = source.chars().peekable();
  let mut state = State::Default;

  while let Some(ch) = chars.next() {
    let next = chars.peek().copied();

    match state {
      State::Default => match ch {
        '/' if next == Some('*') => {
          chars.next();
          output.push_str("/*");
          state = State::BlockComment;
          continue;
        }
        '/' if next == Some('/') => {
          chars.next();
          while chars.peek().is_some_and(|c| *c != '\n' && *c != '\r') {
            chars.next();
          }
          continue;
        }
        '\'' => state = State::SingleQuote,
        '"' => state = State::DoubleQuote,
        '(' if ends_with_url(&output) => state = State::Url,
        _ => {}
      },
      State::BlockComment => {
        if ch == '*' && next == Some('/') {
          chars.next();
          output.push_str("*/");
          state = State::Default;
          continue;
        }
      }
      State::SingleQuote => match ch {
        '\\' => {
          push_escape(&mut output, &mut chars);
          continue;
        }
        '\'' => state = State::Default,
        _ => {}
      },
      State::DoubleQuote => match ch {
        '\\' => {
          push_escape(&mut output, &mut chars);
          continue;
        }
        '"' => state = State::Default,
        _ => {}
      },
      State::Url => match ch {
        '\'' => state = State::UrlSingleQuote,
        '"' => state = State::UrlDoubleQuote,
        ')' => state = State::Default,
        _ => {}
      },
      State::UrlSingleQuote => match ch {
        '\\' => {
          push_escape(&mut output, &mut chars);
          continue;
        }
        '\'' => state = State::Url,
        _ => {}
      },
      State::UrlDoubleQuote => match ch {
        '\\' => {
          push_escape(&mut output, &mut chars);
          continue;
        }
        '"' => state = State::Url,
        _ => {}
      },
    }

    output.push(ch);
  }

  Cow::Owned(output)
}

fn push_escape(output: &mut String, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
  output.push('\\');
  if let Some(escaped) = chars.next() {
    output.push(escaped);
  }
}

/// Whether `output` ends in a `url` token that is not part of a longer
/// identifier
fn ends_with_url(output: &str) -> bool {
  let len = output.len();
  if len < 3 || !output.is_char_boundary(len - 3) {
    return false;
  }

  if !output[len - 3..].eq_ignore_ascii_case("url") {
    return false;
  }

  match output[..len - 3].chars().next_back() {
    Some(ch) if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' => false,
    _ => true,
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn leaves_sources_without_line_comments_untouched() {
    let source = ".a {\n  color: red;\n}\n";

    assert!(matches!(strip_line_comments(source), Cow::Borrowed(_)));
  }

  #[test]
  fn strips_line_comments_and_keeps_the_terminator() {
    assert_eq!(
      strip_line_comments("// header\n.a {\n  color: red; // trailing\n}\n"),
      "\n.a {\n  color: red; \n}\n"
    );
  }

  #[test]
  fn strips_a_comment_at_end_of_input() {
    assert_eq!(strip_line_comments(".a {}\n// done"), ".a {}\n");
  }

  #[test]
  fn keeps_double_slashes_inside_strings() {
    assert_eq!(
      strip_line_comments(".a {\n  content: \"//\";\n}\n"),
      ".a {\n  content: \"//\";\n}\n"
    );
  }

  #[test]
  fn keeps_protocols_inside_unquoted_urls() {
    assert_eq!(
      strip_line_comments(".a {\n  background: url(https://cdn.example.com/x.png);\n}\n"),
      ".a {\n  background: url(https://cdn.example.com/x.png);\n}\n"
    );
  }

  #[test]
  fn keeps_protocol_relative_urls() {
    let source = ".a {\n  background: url(//cdn.example.com/x.png);\n}\n";

    assert_eq!(strip_line_comments(source), source);
  }

  #[test]
  fn keeps_double_slashes_inside_block_comments() {
    let source = "/* see https://example.com */\n.a {}\n";

    assert_eq!(strip_line_comments(source), source);
  }

  #[test]
  fn handles_quoted_parens_inside_urls() {
    let source = ".a {\n  background: url(\"a)b.png\");\n  color: red; // note\n}\n";

    assert_eq!(
      strip_line_comments(source),
      ".a {\n  background: url(\"a)b.png\");\n  color: red; \n}\n"
    );
  }

  #[test]
  fn ignores_apostrophes_inside_line_comments() {
    assert_eq!(
      strip_line_comments("// it's a note\n.a {\n  color: red;\n}\n"),
      "\n.a {\n  color: red;\n}\n"
    );
  }

  #[test]
  fn does_not_treat_longer_identifiers_as_url_tokens() {
    assert_eq!(
      strip_line_comments(".a {\n  width: curl(1); // x\n}\n"),
      ".a {\n  width: curl(1); \n}\n"
    );
  }
}
