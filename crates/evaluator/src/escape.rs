/// Decodes backslash escapes in printed text. Unknown or malformed escapes
/// are kept verbatim, backslash included.
pub fn decode_escapes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);

            continue;
        }

        let Some(&next) = chars.peek() else {
            output.push('\\');

            break;
        };

        match next {
            '\n' => {
                chars.next();
            }

            '0'..='7' => {
                let mut code = 0;

                for _ in 0..3 {
                    match chars.peek().and_then(|digit| digit.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;

                            chars.next();
                        }

                        None => break,
                    }
                }

                output.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }

            'x' => {
                let digits: String = chars.clone().skip(1).take(2).collect();

                if digits.len() == 2 && digits.chars().all(|digit| digit.is_ascii_hexdigit()) {
                    chars.nth(2);

                    let code = u32::from_str_radix(&digits, 16).unwrap_or_default();

                    output.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                } else {
                    output.push('\\');
                }
            }

            _ => match simple_escape(next) {
                Some(decoded) => {
                    chars.next();

                    output.push(decoded);
                }

                None => output.push('\\'),
            },
        }
    }

    output
}

fn simple_escape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0c'),
        'v' => Some('\x0b'),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn control_characters() {
        assert_eq!(decode_escapes(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(decode_escapes(r"\r\a\b\f\v"), "\r\x07\x08\x0c\x0b");
    }

    #[test]
    fn quotes_and_backslashes() {
        assert_eq!(decode_escapes(r#"\"q\" \'s\'"#), "\"q\" 's'");
        assert_eq!(decode_escapes(r"back\\slash"), "back\\slash");
        assert_eq!(decode_escapes(r"\\n"), "\\n");
    }

    #[test]
    fn numeric_escapes() {
        assert_eq!(decode_escapes(r"\x41\x62"), "Ab");
        assert_eq!(decode_escapes(r"\101\0"), "A\0");
        assert_eq!(decode_escapes(r"\1011"), "A1");
    }

    #[test]
    fn unknown_and_malformed_escapes_are_kept() {
        assert_eq!(decode_escapes(r"\q"), "\\q");
        assert_eq!(decode_escapes(r"\xZ1"), "\\xZ1");
        assert_eq!(decode_escapes(r"\x+f"), "\\x+f");
        assert_eq!(decode_escapes("trailing\\"), "trailing\\");
    }

    #[test]
    fn escaped_newline_is_removed() {
        assert_eq!(decode_escapes("one \\\ntwo"), "one two");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(decode_escapes("héllo wörld"), "héllo wörld");
    }
}
