// mainから直接呼び出すアプリケーションの動作モード(C, W)のモジュール

mod calculator;
mod waits;

pub use calculator::CalculatorApp;
pub use waits::WaitsApp;
