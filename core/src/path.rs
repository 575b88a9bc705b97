//! Resource path resolution.
//!
//! Binds positional path arguments to the `{slot}`s of a descriptor's
//! template. Every slot must be bound exactly once; the argument count is
//! checked before anything is written, so a bad call never reaches a
//! transport.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::descriptor::OperationDescriptor;
use crate::error::ApiError;

/// Characters escaped inside a single path segment. `/` is included so an
/// argument cannot spill into the next segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Substitute `args` into the descriptor's template in slot order.
pub fn resolve(descriptor: &OperationDescriptor, args: &[&str]) -> Result<String, ApiError> {
    let expected = descriptor.slot_count();
    if args.len() != expected {
        return Err(ApiError::malformed(
            descriptor.id(),
            format!(
                "expected {expected} path argument{}, got {}",
                if expected == 1 { "" } else { "s" },
                args.len()
            ),
        ));
    }

    let template = descriptor.path_template();
    let mut path = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(open) = rest.find('{') {
        let close = rest[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| ApiError::malformed(descriptor.id(), "unclosed slot in path template"))?;
        let name = &rest[open + 1..close];
        let value = args
            .next()
            .ok_or_else(|| ApiError::malformed(descriptor.id(), format!("no argument for {name}")))?;
        if value.trim().is_empty() {
            return Err(ApiError::malformed(
                descriptor.id(),
                format!("path argument {name} is empty"),
            ));
        }
        // URL parsers collapse dot segments even when percent-encoded.
        if matches!(*value, "." | "..") {
            return Err(ApiError::malformed(
                descriptor.id(),
                format!("path argument {name} is a dot segment"),
            ));
        }
        path.push_str(&rest[..open]);
        path.extend(utf8_percent_encode(value, SEGMENT));
        rest = &rest[close + 1..];
    }
    path.push_str(rest);
    Ok(path)
}
