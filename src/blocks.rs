use crate::condition;
use crate::context::Context;
use crate::fields::FieldMap;
use crate::report::{Diagnostic, Reporter};
use crate::scanner::{Scanner, Tag, TAG_OPEN};

/// Resolve every `[[IF:x]]...[[ENDIF:x]]` block, rescanning until the text
/// stops changing or `ctx.max_passes` is hit, then tidy blank lines.
pub fn resolve(text: &str, fields: &FieldMap, ctx: &Context, reporter: &dyn Reporter) -> String {
    if text.is_empty() {
        return String::new();
    }
    // always do at least one pass, even with an unvalidated context
    let max_passes = ctx.max_passes.max(1);
    let mut current = text.to_string();
    let mut passes = 0;
    loop {
        if passes >= max_passes {
            reporter.report(&Diagnostic::PassLimitReached { passes });
            break;
        }
        let next = resolve_pass(&current, fields);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }
    collapse_blank_lines(&current).trim().to_string()
}

/// An `[[IF:token]]` seen but not yet closed.
struct OpenBlock<'a> {
    token: &'a str,
    /// offset in the output where the literal opening tag starts
    tag_at: usize,
    /// offset in the output where the body starts
    body_at: usize,
    /// whitespace directly after the opening tag in the source
    lead: usize,
}

/// One left-to-right rewrite of the text. Each `[[ENDIF:x]]` closes the
/// innermost open `[[IF:x]]`; opening tags that never close stay literal.
fn resolve_pass(text: &str, fields: &FieldMap) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open: Vec<OpenBlock<'_>> = Vec::new();
    let mut sc = Scanner::new(text);
    let mut copied = 0;
    while sc.skip_to(TAG_OPEN) {
        let start = sc.pos();
        match sc.read_tag() {
            Some(Tag::If(token)) => {
                out.push_str(&text[copied..start]);
                let tag_at = out.len();
                out.push_str(&text[start..sc.pos()]);
                let rest = &text[sc.pos()..];
                open.push(OpenBlock {
                    token,
                    tag_at,
                    body_at: out.len(),
                    lead: rest.len() - rest.trim_start().len(),
                });
                copied = sc.pos();
            }
            Some(Tag::EndIf(token)) => {
                let Some(k) = open.iter().rposition(|b| b.token == token) else {
                    continue;
                };
                let pending = &text[copied..start];
                out.push_str(pending);
                let tail = pending.len() - pending.trim_end().len();
                // blocks opened after this one lose their chance to close
                let block = open.swap_remove(k);
                open.truncate(k);
                if condition::evaluate(Some(token), fields) {
                    let end = out.len() - tail;
                    let begin = (block.body_at + block.lead).min(end);
                    out.truncate(end);
                    out.replace_range(block.tag_at..begin, "");
                } else {
                    out.truncate(block.tag_at);
                }
                copied = sc.pos();
            }
            Some(Tag::Placeholder(_)) => {}
            None => sc.bump(),
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// Squash three or more consecutive line breaks into one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut sc = Scanner::new(text);
    while !sc.eof() {
        let start = sc.pos();
        let mut breaks = 0;
        while sc.line_break() {
            breaks += 1;
        }
        match breaks {
            0 => {
                sc.bump();
                out.push_str(&text[start..sc.pos()]);
            }
            1 | 2 => out.push_str(&text[start..sc.pos()]),
            _ => out.push_str("\n\n"),
        }
    }
    out
}
