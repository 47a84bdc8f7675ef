//! Space header checks
//!
//! Reserved headers look like `_consts:` (or `_indent: 4`), custom headers like
//! `$_name[owner]:`. Owners are shared with declarations: `_main` is the only reserved space that
//! may own anything.

use crate::usl::diagnostics::{DiagnosticKind, TokenizeResult};
use crate::usl::grammar::{is_custom_space_char, is_reserved_name_char, ReservedSpace, MAIN_OWNER};
use crate::usl::lexing::Line;
use crate::usl::token::{Owner, SpaceId};
use crate::usl::tokenizer::registry::SpaceRegistry;

/// The name of a reserved header: everything up to the first `:` or `%`, spaces ignored.
pub fn reserved_name(line: &Line) -> TokenizeResult<String> {
    let mut name = String::new();
    for c in line.text.chars().filter(|c| *c != ' ') {
        if c == ':' || c == '%' {
            break;
        }
        if !is_reserved_name_char(c) {
            return Err(line
                .report(
                    DiagnosticKind::Syntax,
                    format!("Invalid space name syntax: {}{}", name, c),
                )
                .underline(&c.to_string(), 0));
        }
        name.push(c);
    }
    Ok(name)
}

pub fn known_reserved_space(name: &str, line: &Line) -> TokenizeResult<ReservedSpace> {
    ReservedSpace::from_name(name).map_err(|_| {
        line.report(
            DiagnosticKind::Syntax,
            format!("Not a reserved space: {}", name),
        )
        .underline(name, 0)
    })
}

/// Every reserved header but `_indent` (whose value follows the colon) ends in a colon.
pub fn ends_with_colon(space: ReservedSpace, line: &Line) -> TokenizeResult<()> {
    if space == ReservedSpace::Indent {
        return Ok(());
    }
    match line.text.trim_end().chars().last() {
        Some(':') => Ok(()),
        Some(last) => Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Space {} must end with a colon", space),
            )
            .underline(&last.to_string(), -1)),
        None => Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Space {} must end with a colon", space),
            )
            .underline_line()),
    }
}

pub fn not_a_duplicate(
    registry: &SpaceRegistry,
    id: &SpaceId,
    name: &str,
    line: &Line,
) -> TokenizeResult<()> {
    if registry.contains(id) {
        return Err(line
            .report(
                DiagnosticKind::Duplication,
                format!("Can not have two similar spaces: {}", name),
            )
            .underline(name, 0));
    }
    Ok(())
}

/// Split `$_name...` into the name (without `$`) and whatever follows it.
pub fn custom_space_name(line: &Line) -> TokenizeResult<(&str, &str)> {
    let text = line.text.as_str();
    let after_marker = text.strip_prefix('$').unwrap_or(text);
    let end = after_marker
        .find(|c: char| !is_custom_space_char(c))
        .unwrap_or(after_marker.len());
    let (name, rest) = after_marker.split_at(end);

    if let Some(bad) = rest.chars().next().filter(|c| !matches!(c, '[' | ' ' | ':')) {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid char {:?} in space name {}", bad, name),
            )
            .underline(&bad.to_string(), 0));
    }
    if name == "_" {
        return Err(line
            .report(DiagnosticKind::Syntax, "Missing custom space name")
            .underline("$_", 0));
    }
    Ok((name, rest))
}

/// Parse the `[owner]:` tail of a custom header.
pub fn custom_space_owner(rest: &str, name: &str, line: &Line) -> TokenizeResult<Owner> {
    let rest = rest.trim_start();

    if rest.is_empty() || rest.starts_with(':') {
        return Err(line
            .report(DiagnosticKind::Syntax, "Missing owner")
            .underline(name, -1));
    }
    let Some(bracketed) = rest.strip_prefix('[') else {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Custom space initialization must follow with an owner: {}", name),
            )
            .underline(rest, -1));
    };
    let Some((inner, after)) = bracketed.split_once(']') else {
        return Err(line
            .report(DiagnosticKind::Syntax, "Unclosed owner bracket")
            .underline("[", -1));
    };

    let after = after.trim();
    if after != ":" {
        let report = line.report(DiagnosticKind::Syntax, "Expected a colon");
        return Err(match after.chars().last() {
            Some(last) => report.underline(&last.to_string(), -1),
            None => report.underline("]", -1),
        });
    }

    owner(inner, line)
}

/// Resolve an owner name (brackets already removed).
pub fn owner(name: &str, line: &Line) -> TokenizeResult<Owner> {
    if name == MAIN_OWNER {
        return Ok(Owner::main());
    }
    if name.starts_with('_') {
        return Err(line
            .report(
                DiagnosticKind::Ownership,
                format!("Can not set reserved space {} as owner", name),
            )
            .underline(name, -1));
    }
    if name.is_empty() {
        return Err(line
            .report(DiagnosticKind::Ownership, "Can not set a null space as owner")
            .underline("[]", -1));
    }
    if let Some(bad) = name.chars().find(|c| !is_custom_space_char(*c)) {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid char {:?} for owner {}", bad, name),
            )
            .underline(&format!("[{}]", name), -1));
    }
    Ok(Owner::Named(name.to_string()))
}
