#![warn(rust_2018_idioms)]

mod app;

use mahjong_hand::error;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "C" => {
            // Calculator (役計算モード)
            app::CalculatorApp::new(args2).run();
        }
        "W" => {
            // Waits (待ち解析モード)
            app::WaitsApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
