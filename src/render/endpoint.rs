//! Markdown fragment generation for one endpoint directive.
//!
//! Output is deterministic: the same arguments and operation always produce
//! the same bytes. Headings carry `data-toc-label` attributes so the host
//! site's navigation shows the short label instead of the raw heading text.

use crate::directive::{DirectiveError, EndpointArguments};
use crate::spec::OperationDescriptor;

/// Render the documentation fragment for validated arguments against the
/// operation they resolved to.
///
/// Fails when the operation lacks `summary` or `description`; the error
/// names the (path, method) pair so the inline marker points at the right
/// block.
pub fn render_endpoint(
    args: &EndpointArguments,
    op: &OperationDescriptor,
) -> Result<String, DirectiveError> {
    let method_lower = args
        .http_method
        .as_deref()
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "any".to_string());
    let method_display = args
        .http_method
        .as_deref()
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| "ANY".to_string());

    let missing = |field| DirectiveError::MissingOperationField {
        path: args.path.clone(),
        method: method_lower.clone(),
        field,
    };
    let summary = op.summary.as_deref().ok_or_else(|| missing("summary"))?;
    let description = op.description.as_deref().ok_or_else(|| missing("description"))?;

    let mut docs = String::new();

    // H2 endpoint title, optional. The icon span is emitted only when an
    // icon was given.
    if let Some(title) = &args.endpoint_title {
        match &args.endpoint_icon {
            Some(icon) => docs.push_str(&format!(
                "## <icon class=\"{icon}\" />&nbsp; {title} {{: data-toc-label=\"{title}\" : .custom-header}}\n"
            )),
            None => docs.push_str(&format!(
                "## {title} {{: data-toc-label=\"{title}\" : .custom-header}}\n"
            )),
        }
    }

    // H3 method + path heading, styled as H2.
    docs.push_str(&format!(
        "### <span class=\"http-{method_lower}\">{method_display}</span>` {path}` -- {summary} {{ : data-toc-label=\"{method_display} {summary}\" : .styled-as-h2 }}\n\n",
        path = args.path
    ));

    docs.push_str(description);
    docs.push_str("\n\n");

    match args.tips.as_deref() {
        Some(tips) if !tips.is_empty() => {
            docs.push_str(&render_tips(tips));
            docs.push_str("\n\n");
        }
        _ => {}
    }

    Ok(docs)
}

/// Tips callout: one admonition header, one 4-space-indented line per tip.
fn render_tips(tips: &[String]) -> String {
    let mut block = String::from("!!! tip \"Method Tips\"\n");
    for tip in tips {
        block.push_str(&format!("    {tip}\n"));
    }
    block
}
