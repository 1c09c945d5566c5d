// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

/// Strip-Länge falls LED_COUNT nicht gesetzt ist
const DEFAULT_LED_COUNT: usize = 30;

fn main() {
    // Lade .env file für die Strip-Konfiguration
    // Fehler ignorieren wenn .env nicht existiert (dann gelten ENV vars bzw. Defaults)
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env file nicht gefunden: {}", e);
    }
    println!("cargo:rerun-if-env-changed=LED_COUNT");

    // Gebe Strip-Länge an Rust-Compiler weiter
    // Der Wert wird zur Compile-Zeit in den Code eingebacken (config::LED_COUNT)
    let led_count = match std::env::var("LED_COUNT") {
        Ok(value) => match value.trim().parse::<usize>() {
            Ok(count) if count > 0 => count,
            _ => panic!("LED_COUNT muss eine positive Zahl sein, ist aber '{}'", value),
        },
        Err(_) => {
            println!(
                "cargo:warning=LED_COUNT nicht gesetzt, nutze Default {}",
                DEFAULT_LED_COUNT
            );
            DEFAULT_LED_COUNT
        }
    };
    println!("cargo:rustc-env=LED_COUNT={}", led_count);

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1];
        let what = &args[2];

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use esp_println as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start()` runs before the executor."
                    );
                    eprintln!();
                }
                _ => (),
            },
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
