use gcode_translate::translate::{translate_document, TranslateOptions};
use gcode_translate::Dialect;

fn main() {
    println!("=== Slicer G-code Translation Demo ===");

    let source = "\
;FLAVOR:Marlin
G21
G90
G28 ; home all axes
M3
G1 F1800 X10 Y20 Z0.3 E1.5
G1 X15
G0 Y5
M5
T1
";

    for dialect in [Dialect::MicroFab, Dialect::MotionStage] {
        let options = TranslateOptions {
            dialect,
            ..TranslateOptions::default()
        };
        let result = translate_document(source, &options);

        println!("\n--- {} ---", dialect);
        print!("{}", result.text);
        for diagnostic in &result.diagnostics {
            println!(
                "line {}: {:?} - {}",
                diagnostic.line, diagnostic.severity, diagnostic.message
            );
        }
        println!("{}", result.state);
    }
}
