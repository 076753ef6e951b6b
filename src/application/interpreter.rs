use crate::domain::response::GatewayResponse;
use crate::interfaces::xml::response_reader::{XmlElement, read_document};

pub const PLAIN_ERROR_MARKER: &str = "error:";
pub const NO_URL_MESSAGE: &str = "No payment URL received";

/// A named lookup of one field in a parsed response.
pub struct ExtractionRule {
    pub name: &'static str,
    pub extract: fn(&XmlElement) -> Option<String>,
}

impl ExtractionRule {
    pub fn apply(&self, root: &XmlElement) -> Option<String> {
        (self.extract)(root)
    }
}

/// Where the provider may put the payment URL, highest priority first.
pub const URL_RULES: [ExtractionRule; 4] = [
    ExtractionRule {
        name: "url",
        extract: top_level_url,
    },
    ExtractionRule {
        name: "payment/url",
        extract: payment_url,
    },
    ExtractionRule {
        name: "response/url",
        extract: response_url,
    },
    ExtractionRule {
        name: "body/payment_url",
        extract: body_payment_url,
    },
];

/// Where an error message may be found once no URL was.
pub const ERROR_RULES: [ExtractionRule; 2] = [
    ExtractionRule {
        name: "error",
        extract: first_error_child,
    },
    ExtractionRule {
        name: "any error child",
        extract: any_error_child,
    },
];

fn top_level_url(root: &XmlElement) -> Option<String> {
    text_at(root, &["url"])
}

fn payment_url(root: &XmlElement) -> Option<String> {
    text_at(root, &["payment", "url"])
}

fn response_url(root: &XmlElement) -> Option<String> {
    text_at(root, &["response", "url"])
}

fn body_payment_url(root: &XmlElement) -> Option<String> {
    text_at(root, &["body", "payment_url"])
}

fn first_error_child(root: &XmlElement) -> Option<String> {
    text_at(root, &["error"])
}

fn any_error_child(root: &XmlElement) -> Option<String> {
    root.children_named("error")
        .find_map(XmlElement::text)
        .map(str::to_string)
}

fn text_at(root: &XmlElement, path: &[&str]) -> Option<String> {
    root.descend(path)
        .and_then(XmlElement::text)
        .map(str::to_string)
}

fn first_match(rules: &[ExtractionRule], root: &XmlElement) -> Option<(&'static str, String)> {
    rules
        .iter()
        .find_map(|rule| rule.apply(root).map(|value| (rule.name, value)))
}

/// Classifies a raw PaymentCreate response body.
pub fn interpret(body: &str) -> GatewayResponse {
    let trimmed = body.trim();

    if trimmed
        .get(..PLAIN_ERROR_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PLAIN_ERROR_MARKER))
    {
        return GatewayResponse::PlainTextError(trimmed.to_string());
    }

    let root = match read_document(trimmed) {
        Ok(root) => root,
        Err(err) => return GatewayResponse::Malformed(err.to_string()),
    };

    if let Some((rule, url)) = first_match(&URL_RULES, &root) {
        tracing::debug!(rule, "payment URL found");
        return GatewayResponse::Success(url);
    }

    match first_match(&ERROR_RULES, &root) {
        Some((_, message)) => GatewayResponse::GatewayError(message),
        None => GatewayResponse::GatewayError(NO_URL_MESSAGE.to_string()),
    }
}
