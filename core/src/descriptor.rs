//! Operation descriptors: the static shape of one REST endpoint.
//!
//! # Design
//! Descriptors are built in `const` context and stored in static tables.
//! `OperationDescriptor::new` and the `with_*` builders check the template
//! and field lists during constant evaluation, so a malformed table entry
//! fails the build instead of the first call that uses it.

use std::fmt;

use crate::http::HttpMethod;

/// Immutable metadata describing one REST endpoint.
///
/// Fields are private so every descriptor goes through the checked const
/// builders; a struct literal does not compile outside this module:
///
/// ```compile_fail
/// use meraki_core::{HttpMethod, OperationDescriptor};
///
/// let unchecked = OperationDescriptor {
///     id: "getNothing",
///     method: HttpMethod::Get,
///     path_template: "no-leading-slash/{",
///     body_fields: &[],
///     required_body_fields: &[],
///     tags: &[],
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation id as published in the API description, e.g. `getNetworkUplinkSettings`.
    id: &'static str,
    method: HttpMethod,
    /// Resource path with named `{slot}` placeholders.
    path_template: &'static str,
    /// Body field allow-list, in declaration order.
    body_fields: &'static [&'static str],
    /// Body fields the call must supply. Always a subset of `body_fields`.
    required_body_fields: &'static [&'static str],
    tags: &'static [&'static str],
}

impl OperationDescriptor {
    pub const fn new(id: &'static str, method: HttpMethod, path_template: &'static str) -> Self {
        check_template(path_template);
        Self {
            id,
            method,
            path_template,
            body_fields: &[],
            required_body_fields: &[],
            tags: &[],
        }
    }

    pub const fn with_body(mut self, fields: &'static [&'static str]) -> Self {
        if !self.method.has_body() && !fields.is_empty() {
            panic!("GET and DELETE operations cannot declare body fields");
        }
        self.body_fields = fields;
        self
    }

    pub const fn with_required(mut self, fields: &'static [&'static str]) -> Self {
        let mut i = 0;
        while i < fields.len() {
            if !contains(self.body_fields, fields[i]) {
                panic!("required body field missing from the body field list");
            }
            i += 1;
        }
        self.required_body_fields = fields;
        self
    }

    pub const fn with_tags(mut self, tags: &'static [&'static str]) -> Self {
        self.tags = tags;
        self
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    pub const fn path_template(&self) -> &'static str {
        self.path_template
    }

    pub const fn body_fields(&self) -> &'static [&'static str] {
        self.body_fields
    }

    pub const fn required_body_fields(&self) -> &'static [&'static str] {
        self.required_body_fields
    }

    pub const fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    /// Slot names in template order.
    pub fn slots(&self) -> impl Iterator<Item = &'static str> {
        self.path_template
            .split('{')
            .skip(1)
            .filter_map(|s| s.split_once('}').map(|(name, _)| name))
    }

    pub fn slot_count(&self) -> usize {
        self.slots().count()
    }

    /// Whether `field` is on the body allow-list.
    pub fn accepts(&self, field: &str) -> bool {
        self.body_fields.iter().any(|f| *f == field)
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path_template, self.id)
    }
}

/// Templates start with `/`, and every `{` is closed by a `}` around a
/// non-empty slot name before the next `{`.
const fn check_template(template: &str) {
    let bytes = template.as_bytes();
    if bytes.is_empty() || bytes[0] != b'/' {
        panic!("path template must start with '/'");
    }
    let mut open = false;
    let mut name_len = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if open {
                    panic!("nested slot in path template");
                }
                open = true;
                name_len = 0;
            }
            b'}' => {
                if !open {
                    panic!("unmatched closing brace in path template");
                }
                if name_len == 0 {
                    panic!("empty slot name in path template");
                }
                open = false;
            }
            b'/' if open => panic!("'/' inside a path slot"),
            _ => {
                if open {
                    name_len += 1;
                }
            }
        }
        i += 1;
    }
    if open {
        panic!("unclosed slot in path template");
    }
}

const fn contains(haystack: &[&str], needle: &str) -> bool {
    let mut i = 0;
    while i < haystack.len() {
        if str_eq(haystack[i], needle) {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
