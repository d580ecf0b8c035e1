//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'analyseur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, diviseur
//!   non constant, 0^0, requalification entre parenthèses)
//! - invariants clés : coeffs.len() == degre+1 et coefficient de tête
//!   non nul hors degré 0, sur chaque analyse réussie

use std::time::{Duration, Instant};

use super::complexe::Complexe;
use super::erreurs::{ErreurCalcul, ErreurComplexe, ErreurPolynome, ErreurRationnel};
use super::polynome::Polynome;
use super::rationnel::Rationnel;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(depart: Instant, max: Duration) {
    if depart.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(erreur: &ErreurCalcul) -> bool {
    // Liste blanche : échecs *normaux* sur une grammaire valide qui peut
    // diviser par zéro ou élever zéro à la puissance zéro.
    matches!(
        erreur,
        ErreurCalcul::Rationnel(ErreurRationnel::DivisionParZero)
            | ErreurCalcul::Complexe(ErreurComplexe::DivisionParZero)
            | ErreurCalcul::Polynome(ErreurPolynome::DiviseurInvalide)
            | ErreurCalcul::Polynome(ErreurPolynome::FormeIndeterminee)
            | ErreurCalcul::Polynome(ErreurPolynome::OperateurDesequilibre)
    )
}

fn verifie_invariants(p: &Polynome) {
    assert_eq!(
        p.coefficients().len(),
        p.degre() + 1,
        "coeffs.len() != degre+1"
    );
    if p.degre() > 0 {
        assert!(
            !p.coefficients()[p.degre()].est_nul(),
            "coefficient de tête nul hors degré 0"
        );
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "x".to_string(),
        1 => "i".to_string(),
        2 => "0".to_string(),
        3 | 4 => format!("{}", rng.pick(9)),
        _ => format!("{}", 1 + rng.pick(7)),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(7) {
        0 => gen_atome(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        5 => format!("({})^{}", gen_expr(rng, profondeur - 1), rng.pick(4)),
        _ => {
            if rng.coin() {
                format!("-{}", gen_atome(rng))
            } else {
                gen_atome(rng)
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_grammaire_valide_et_invariants() {
    let depart = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..150 {
        budget(depart, max);

        let expr = gen_expr(&mut rng, 4);
        match Polynome::analyser(&expr, "x") {
            Ok(p) => {
                verifie_invariants(&p);
                // l'affichage d'un polynôme analysé est toujours non vide
                assert!(!p.to_string().is_empty(), "affichage vide: {expr:?}");
                vus_ok += 1;
            }
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 20, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes polynômes et mêmes erreurs.
    let depart = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(depart, max);

        let expr_a = gen_expr(&mut rng_a, 4);
        let expr_b = gen_expr(&mut rng_b, 4);
        assert_eq!(expr_a, expr_b);

        let res_a = Polynome::analyser(&expr_a, "x");
        let res_b = Polynome::analyser(&expr_b, "x");
        assert_eq!(res_a, res_b, "analyse non déterministe: {expr_a:?}");
    }
}

#[test]
fn fuzz_safe_derivee_et_evaluation() {
    // Sur chaque analyse réussie : dériver puis évaluer reste exact et
    // ne panique jamais.
    let depart = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFEED_u64);
    let point = Complexe::reel(Rationnel::depuis_texte("1/2").unwrap());

    for _ in 0..80 {
        budget(depart, max);

        let expr = gen_expr(&mut rng, 3);
        if let Ok(p) = Polynome::analyser(&expr, "x") {
            let d = p.deriver();
            verifie_invariants(&d);
            assert!(d.degre() <= p.degre());
            let _ = p.evaluer(&point).unwrap();
            let _ = d.evaluer(&point).unwrap();
        }
    }
}

#[test]
fn fuzz_safe_parentheses_profondes_anti_pile() {
    // L'analyseur est itératif : un emboîtement massif ne doit pas
    // faire déborder la pile d'appels.
    let depart = Instant::now();
    let max = Duration::from_millis(500);

    let profondeur = 800usize;
    let mut expr = String::with_capacity(profondeur * 2 + 1);
    for _ in 0..profondeur {
        expr.push('(');
    }
    expr.push('1');
    for _ in 0..profondeur {
        expr.push(')');
    }

    budget(depart, max);
    let p = Polynome::analyser(&expr, "x").unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(p.degre(), 0);
    assert_eq!(p.to_string(), "1");
}
