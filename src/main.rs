// src/main.rs
//
// Moteur polynomial Q-pur — entrée console
// ----------------------------------------
// - avec une expression en argument : analyse unique puis sortie ;
// - sans argument : boucle interactive (voir app/console.rs).
//
// Point d'entrée seulement : l'état vit dans app/etat.rs, la boucle
// dans app/console.rs, tout le calcul dans le noyau (crate lib).

use std::process::ExitCode;

use clap::Parser;

mod app;

/// Moteur polynomial exact : rationnels et complexes en précision
/// arbitraire, sans flottants.
#[derive(Parser, Debug)]
#[command(name = "polynome_qpur", version, about)]
struct Options {
    /// Symbole de la variable (un seul caractère)
    #[arg(long, default_value = "x")]
    variable: String,

    /// Chiffres de la lecture décimale (borné côté état)
    #[arg(long, default_value_t = 20)]
    chiffres: usize,

    /// Expression à analyser puis quitter (sinon : boucle interactive)
    expression: Option<String>,
}

fn main() -> ExitCode {
    let options = Options::parse();

    match options.expression.as_deref() {
        Some(expression) => {
            app::console::executer_une(expression, &options.variable, options.chiffres)
        }
        None => app::console::boucle(&options.variable, options.chiffres),
    }
}
