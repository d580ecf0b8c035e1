//! src/app/console.rs
//!
//! Boucle interactive : une ligne = une expression ou une commande.
//!
//! Commandes :
//!   :var <c>        change le symbole de variable
//!   :chiffres <n>   change la précision de lecture décimale
//!   :eval <valeur>  évalue le polynôme courant ("a", "a/b" ou "re|im")
//!   :racines        racines rationnelles du polynôme courant
//!   :aide           rappel des commandes
//!   :q              quitter
//! Toute autre ligne est analysée comme une expression.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use polynome_qpur::noyau::complexe::Complexe;
use polynome_qpur::noyau::lecture::complexe_en_decimal;
use polynome_qpur::noyau::polynome::Polynome;
use polynome_qpur::noyau::racines::chercher_racines;

use super::etat::EtatCalc;

const AIDE: &str = "\
commandes : :var <c>  :chiffres <n>  :eval <valeur>  :racines  :aide  :q
toute autre ligne est analysée comme une expression (ex : (x+3*i)^3)";

/// Analyse une expression unique, affiche le résultat, quitte.
pub fn executer_une(expression: &str, variable: &str, chiffres: usize) -> ExitCode {
    let mut etat = EtatCalc::nouveau(variable, chiffres);
    traiter_expression(&mut etat, expression);
    if etat.erreur.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Boucle interactive sur l'entrée standard.
pub fn boucle(variable: &str, chiffres: usize) -> ExitCode {
    let mut etat = EtatCalc::nouveau(variable, chiffres);
    println!("moteur polynomial Q-pur — {AIDE}");

    let entree = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut ligne = String::new();
        match entree.lock().read_line(&mut ligne) {
            Ok(0) | Err(_) => break, // fin d'entrée
            Ok(_) => {}
        }
        let ligne = ligne.trim();
        if ligne.is_empty() {
            continue;
        }
        if ligne == ":q" || ligne == ":quitter" {
            break;
        }
        traiter_ligne(&mut etat, ligne);
    }
    ExitCode::SUCCESS
}

/* ------------------------ Dispatch des lignes ------------------------ */

fn traiter_ligne(etat: &mut EtatCalc, ligne: &str) {
    if let Some(reste) = ligne.strip_prefix(":var ") {
        etat.set_variable(reste.trim());
        println!("variable : {}", etat.variable);
    } else if let Some(reste) = ligne.strip_prefix(":chiffres ") {
        match reste.trim().parse::<usize>() {
            Ok(n) => {
                etat.set_chiffres(n);
                println!("chiffres : {}", etat.chiffres);
            }
            Err(_) => println!("précision illisible : {reste}"),
        }
    } else if let Some(reste) = ligne.strip_prefix(":eval ") {
        traiter_evaluation(etat, reste.trim());
    } else if ligne == ":racines" {
        traiter_racines(etat);
    } else if ligne == ":aide" {
        println!("{AIDE}");
    } else {
        traiter_expression(etat, ligne);
    }
}

fn traiter_expression(etat: &mut EtatCalc, expression: &str) {
    match Polynome::analyser(expression, &etat.variable) {
        Ok(polynome) => {
            etat.set_polynome(polynome);
            let v = &etat.variable;
            if let Some(p) = &etat.polynome {
                println!("f({v})   = {p}");
            }
            if let Some(p) = &etat.derivee {
                println!("f'({v})  = {p}");
            }
            if let Some(p) = &etat.derivee_seconde {
                println!("f''({v}) = {p}");
            }
        }
        Err(erreur) => {
            etat.set_erreur(erreur.to_string());
            println!("erreur : {erreur}");
        }
    }
}

fn traiter_evaluation(etat: &mut EtatCalc, texte: &str) {
    let Some(polynome) = etat.polynome.clone() else {
        println!("aucun polynôme courant (entrez d'abord une expression)");
        return;
    };
    let point = match Complexe::depuis_texte(texte) {
        Ok(valeur) => valeur,
        Err(erreur) => {
            etat.set_erreur(erreur.to_string());
            println!("erreur : {erreur}");
            return;
        }
    };
    match polynome.evaluer(&point) {
        Ok(valeur) => {
            etat.erreur.clear();
            println!(
                "f({point}) = {valeur} ≈ {}",
                complexe_en_decimal(&valeur, etat.chiffres)
            );
        }
        Err(erreur) => {
            etat.set_erreur(erreur.to_string());
            println!("erreur : {erreur}");
        }
    }
}

fn traiter_racines(etat: &mut EtatCalc) {
    match &etat.polynome {
        Some(polynome) => println!("racines : {}", chercher_racines(polynome)),
        None => println!("aucun polynôme courant (entrez d'abord une expression)"),
    }
}
