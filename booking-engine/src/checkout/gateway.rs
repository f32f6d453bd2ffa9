//! Gateway redirect form
//!
//! Turns the opaque payment-data map into a self-submitting form POST.
//! Keys are never interpreted, so gateway contract changes flow through
//! without touching this client.

use serde_json::Value;
use shared::PaymentSession;

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// String values post bare, everything else as its JSON text
fn field_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the auto-submitting redirect document for a payment session.
///
/// Every entry of the payment-data map becomes one hidden input on a
/// form targeting the gateway URL; loading the document submits it and
/// navigates the full page to the gateway.
pub fn redirect_form(session: &PaymentSession) -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html>\n");
    doc.push_str("<head><meta charset=\"utf-8\"><title>Redirecting to payment</title></head>\n");
    doc.push_str("<body onload=\"document.forms[0].submit()\">\n");
    doc.push_str(&format!(
        "<form method=\"POST\" action=\"{}\">\n",
        escape(&session.gateway_url)
    ));
    for (key, value) in &session.payment_data {
        doc.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            escape(key),
            escape(&field_value(value))
        ));
    }
    doc.push_str("<noscript><button type=\"submit\">Continue to payment</button></noscript>\n");
    doc.push_str("</form>\n</body>\n</html>\n");
    doc
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn session(data: Map<String, Value>) -> PaymentSession {
        PaymentSession {
            gateway_url: "https://gateway.example/pay".to_string(),
            payment_data: data,
        }
    }

    #[test]
    fn test_every_field_becomes_a_hidden_input() {
        let mut data = Map::new();
        data.insert("txnid".to_string(), json!("txn-991"));
        data.insert("amount".to_string(), json!(1890.0));
        data.insert("hash".to_string(), json!("abc123"));

        let doc = redirect_form(&session(data));
        assert!(doc.contains("action=\"https://gateway.example/pay\""));
        assert!(doc.contains("<input type=\"hidden\" name=\"txnid\" value=\"txn-991\">"));
        assert!(doc.contains("<input type=\"hidden\" name=\"amount\" value=\"1890.0\">"));
        assert!(doc.contains("<input type=\"hidden\" name=\"hash\" value=\"abc123\">"));
    }

    #[test]
    fn test_document_self_submits_with_noscript_fallback() {
        let doc = redirect_form(&session(Map::new()));
        assert!(doc.contains("<body onload=\"document.forms[0].submit()\">"));
        assert!(doc.contains("<noscript><button type=\"submit\">Continue to payment</button></noscript>"));
        assert!(doc.contains("method=\"POST\""));
    }

    #[test]
    fn test_values_are_html_escaped() {
        let mut data = Map::new();
        data.insert(
            "productinfo".to_string(),
            json!("Lakeview \"Deluxe\" <2 rooms> & meals"),
        );

        let doc = redirect_form(&session(data));
        assert!(doc.contains(
            "value=\"Lakeview &quot;Deluxe&quot; &lt;2 rooms&gt; &amp; meals\""
        ));
        assert!(!doc.contains("\"Deluxe\" <2"));
    }

    #[test]
    fn test_unknown_keys_pass_through_untouched() {
        let mut data = Map::new();
        data.insert("surl".to_string(), json!("https://resort.example/ok?b=1&c=2"));
        data.insert("udf1".to_string(), json!("future-field"));

        let doc = redirect_form(&session(data));
        assert!(doc.contains("name=\"surl\" value=\"https://resort.example/ok?b=1&amp;c=2\""));
        assert!(doc.contains("name=\"udf1\" value=\"future-field\""));
    }
}
