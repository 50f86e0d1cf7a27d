//! calculadora - A small HTTP calculator service
//!
//! `POST /calcular` with `{"num1", "num2", "operacao"}` returns
//! `{"resultado"}` or a 400 with `{"error"}`.

pub mod calculator;
pub mod cli;
pub mod http_server;
pub mod observability;
