//! JavaScript engine
//!
//! Evaluates the front matter block as a JavaScript expression with an embedded
//! interpreter and converts the result to JSON. This runs arbitrary code from the
//! document; only register it for documents you trust. The engine is parse-only:
//! stringifying through it fails with `UnsupportedOperation`.

use crate::core::engine::Engine;
use crate::core::value::{Data, Value};
use crate::error::{MatterError, Result};
use boa_engine::error::JsNativeErrorKind;
use boa_engine::{Context, JsError, JsValue, Source};

const LANGUAGE: &str = "javascript";

/// The JavaScript engine
pub fn engine() -> Engine {
    Engine::parse_only(parse)
}

/// Evaluate `text` and convert the result.
///
/// The block is first evaluated as the return value of a function so that an
/// object literal is not mistaken for a block statement. If that fails with a
/// syntax error the block is evaluated as a plain script instead. Falsy results
/// (`undefined`, `null`, `0`, `""`) yield an empty mapping.
pub fn parse(text: &str) -> Result<Value> {
    let mut context = Context::default();
    let wrapped = format!("(function() {{\nreturn {};\n}}());", text.trim());

    let value = match eval(&mut context, &wrapped) {
        Ok(value) => value,
        Err(err) if is_syntax_error(&err) => eval(&mut context, text)
            .map_err(|e| MatterError::metadata_syntax(LANGUAGE, e))?,
        Err(err) => return Err(MatterError::metadata_syntax(LANGUAGE, err)),
    };

    if !value.to_boolean() {
        return Ok(Value::Object(Data::new()));
    }
    value
        .to_json(&mut context)
        .map_err(|e| MatterError::metadata_syntax(LANGUAGE, e))
}

fn eval(context: &mut Context, code: &str) -> std::result::Result<JsValue, JsError> {
    context.eval(Source::from_bytes(code))
}

/// Native errors are classified by kind; thrown values fall back to their message
fn is_syntax_error(err: &JsError) -> bool {
    if let Some(native) = err.as_native() {
        return matches!(native.kind, JsNativeErrorKind::Syntax);
    }
    let message = err.to_string().to_lowercase();
    message.contains("unexpected") || message.contains("identifier")
}
