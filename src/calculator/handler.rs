//! Calculator handler
//!
//! Parses a raw request body, evaluates it and logs the outcome. The
//! handler is an immutable value built once at startup, so concurrent
//! requests share nothing mutable.

use tracing::{info, warn};

use crate::observability::Event;

use super::errors::{CalcError, CalcResult, Language};
use super::request::CalculationRequest;
use super::response::{CalculationResult, ErrorResponse};

/// Stateless calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    language: Language,
}

impl Calculator {
    /// Create a calculator answering in the given language
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Language of client-facing error messages
    pub fn language(&self) -> Language {
        self.language
    }

    /// Parse and evaluate a raw request body
    pub fn handle(&self, body: &[u8]) -> CalcResult<CalculationResult> {
        let outcome = CalculationRequest::parse(body).and_then(|req| self.evaluate(&req));
        if let Err(err) = outcome {
            self.log_rejection(err);
        }
        outcome
    }

    /// Evaluate an already validated request
    ///
    /// Successes are logged here; rejections are logged by the caller that
    /// owns the whole request.
    pub fn evaluate(&self, req: &CalculationRequest) -> CalcResult<CalculationResult> {
        let resultado = req.operacao.apply(req.num1, req.num2)?;

        info!(
            event = %Event::CalculationComplete,
            operacao = %req.operacao,
            num1 = req.num1,
            num2 = req.num2,
            resultado,
            "{} | {} and {} = {}",
            req.operacao,
            req.num1,
            req.num2,
            resultado
        );

        Ok(CalculationResult { resultado })
    }

    /// Build the client-facing error body
    pub fn error_response(&self, err: CalcError) -> ErrorResponse {
        ErrorResponse::from_error(err, self.language)
    }

    fn log_rejection(&self, err: CalcError) {
        warn!(
            event = %Event::CalculationRejected,
            code = err.code(),
            error = %err.message(self.language),
            "calculation rejected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    fn calc(body: &str) -> CalcResult<f64> {
        Calculator::default()
            .handle(body.as_bytes())
            .map(|r| r.resultado)
    }

    #[test]
    fn test_sum_example() {
        assert_eq!(calc(r#"{"num1": 10, "num2": 5, "operacao": "soma"}"#), Ok(15.0));
    }

    #[test]
    fn test_all_operations() {
        assert_eq!(calc(r#"{"num1": 7, "num2": 2, "operacao": "subtracao"}"#), Ok(5.0));
        assert_eq!(
            calc(r#"{"num1": "1.5", "num2": 4, "operacao": "multiplicacao"}"#),
            Ok(6.0)
        );
        assert_eq!(calc(r#"{"num1": 9, "num2": "3", "operacao": "divisao"}"#), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            calc(r#"{"num1": 10, "num2": 0, "operacao": "divisao"}"#),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            calc(r#"{"num1": 10, "num2": "0.0", "operacao": "divisao"}"#),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_error_precedence() {
        assert_eq!(calc(""), Err(CalcError::MissingBody));
        assert_eq!(
            calc(r#"{"num1": "abc", "operacao": "potencia"}"#),
            Err(CalcError::MissingField)
        );
        assert_eq!(
            calc(r#"{"num1": "abc", "num2": 0, "operacao": "potencia"}"#),
            Err(CalcError::InvalidNumber)
        );
        assert_eq!(
            calc(r#"{"num1": 1, "num2": 0, "operacao": "potencia"}"#),
            Err(CalcError::InvalidOperation)
        );
    }

    #[test]
    fn test_evaluate_validated_request() {
        let req = CalculationRequest {
            num1: -3.0,
            num2: 0.5,
            operacao: Operation::Divisao,
        };
        let result = Calculator::default().evaluate(&req).unwrap();
        assert_eq!(result.resultado, -6.0);
    }

    #[test]
    fn test_error_response_language() {
        let pt = Calculator::new(Language::Pt);
        assert_eq!(pt.language(), Language::Pt);
        assert_eq!(
            pt.error_response(CalcError::DivisionByZero).error,
            "Divisão por zero não é permitida."
        );
        let en = Calculator::new(Language::En);
        assert_eq!(
            en.error_response(CalcError::DivisionByZero).error,
            "Division by zero not allowed."
        );
    }

    #[test]
    fn test_outcomes_are_logged() {
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::layer::SubscriberExt;

        #[derive(Clone, Default)]
        struct EventCapture {
            events: Arc<Mutex<Vec<(tracing::Level, Vec<(String, String)>)>>>,
        }

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
            fn on_event(
                &self,
                event: &tracing::Event<'_>,
                _ctx: tracing_subscriber::layer::Context<'_, S>,
            ) {
                let mut visitor = FieldVisitor(Vec::new());
                event.record(&mut visitor);
                self.events
                    .lock()
                    .unwrap()
                    .push((*event.metadata().level(), visitor.0));
            }
        }

        struct FieldVisitor(Vec<(String, String)>);
        impl tracing::field::Visit for FieldVisitor {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                self.0.push((field.name().to_string(), value.to_string()));
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                self.0.push((field.name().to_string(), format!("{value:?}")));
            }
        }

        fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
            fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        }

        let capture = EventCapture::default();
        let events = capture.events.clone();
        let subscriber = tracing_subscriber::registry().with(capture);

        tracing::subscriber::with_default(subscriber, || {
            let calculator = Calculator::new(Language::Pt);
            let _ = calculator.handle(br#"{"num1": 10, "num2": 5, "operacao": "soma"}"#);
            let _ = calculator.handle(br#"{"num1": 10, "num2": 0, "operacao": "divisao"}"#);
        });

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 2, "{:?}", *captured);

        let (level, fields) = &captured[0];
        assert_eq!(*level, tracing::Level::INFO);
        assert_eq!(field(fields, "event"), Some("CALCULATION_COMPLETE"));
        assert_eq!(field(fields, "operacao"), Some("soma"));

        let (level, fields) = &captured[1];
        assert_eq!(*level, tracing::Level::WARN);
        assert_eq!(field(fields, "event"), Some("CALCULATION_REJECTED"));
        assert_eq!(field(fields, "code"), Some("CALC_DIVISION_BY_ZERO"));
        assert_eq!(field(fields, "error"), Some("Divisão por zero não é permitida."));
    }
}
