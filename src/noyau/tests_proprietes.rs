//! Tests de propriétés : lois algébriques et vecteurs de référence du
//! moteur complet (analyse -> algèbre -> évaluation -> affichage).

use super::arith::Arithmetique;
use super::complexe::Complexe;
use super::erreurs::{ErreurComplexe, ErreurOperateur, ErreurPolynome};
use super::polynome::Polynome;
use super::racines::{chercher_racines, RacinesRationnelles};
use super::rationnel::Rationnel;

/* ------------------------ Helpers ------------------------ */

fn rat(texte: &str) -> Rationnel {
    Rationnel::depuis_texte(texte).unwrap_or_else(|e| panic!("rat({texte:?}) : {e}"))
}

fn cpx(re: &str, im: &str) -> Complexe {
    Complexe::nouveau(rat(re), rat(im))
}

fn analyser(texte: &str) -> Polynome {
    Polynome::analyser(texte, "x").unwrap_or_else(|e| panic!("analyser({texte:?}) : {e}"))
}

/* ------------------------ Lois algébriques ------------------------ */

#[test]
fn rationnel_commutatif_associatif_distributif() {
    let valeurs = [rat("1/2"), rat("-3/4"), rat("7"), rat("0"), rat("5/6")];
    for a in &valeurs {
        for b in &valeurs {
            assert_eq!(a.ajouter(b).unwrap(), b.ajouter(a).unwrap());
            assert_eq!(a.multiplier(b).unwrap(), b.multiplier(a).unwrap());
            for c in &valeurs {
                assert_eq!(
                    a.ajouter(b).unwrap().ajouter(c).unwrap(),
                    a.ajouter(&b.ajouter(c).unwrap()).unwrap()
                );
                assert_eq!(
                    a.multiplier(b).unwrap().multiplier(c).unwrap(),
                    a.multiplier(&b.multiplier(c).unwrap()).unwrap()
                );
                // distributivité : a*(b+c) = a*b + a*c
                assert_eq!(
                    a.multiplier(&b.ajouter(c).unwrap()).unwrap(),
                    a.multiplier(b)
                        .unwrap()
                        .ajouter(&a.multiplier(c).unwrap())
                        .unwrap()
                );
            }
        }
    }
}

#[test]
fn complexe_commutatif_et_distributif() {
    let valeurs = [cpx("1", "2"), cpx("-1/2", "3"), cpx("0", "0"), cpx("2", "-1")];
    for a in &valeurs {
        for b in &valeurs {
            assert_eq!(a.ajouter(b).unwrap(), b.ajouter(a).unwrap());
            assert_eq!(a.multiplier(b).unwrap(), b.multiplier(a).unwrap());
            for c in &valeurs {
                assert_eq!(
                    a.multiplier(&b.ajouter(c).unwrap()).unwrap(),
                    a.multiplier(b)
                        .unwrap()
                        .ajouter(&a.multiplier(c).unwrap())
                        .unwrap()
                );
            }
        }
    }
}

/* ------------------------ Vecteurs de référence ------------------------ */

#[test]
fn constante_sept() {
    let p = analyser("3+4");
    assert_eq!(p.degre(), 0);
    assert_eq!(p.coefficients()[0], cpx("7", "0"));
}

#[test]
fn trinome_et_affichage() {
    let p = analyser("x^2+2*x+1");
    assert_eq!(p.degre(), 2);
    assert_eq!(
        p.coefficients(),
        &[cpx("1", "0"), cpx("2", "0"), cpx("1", "0")]
    );
    assert_eq!(p.to_string(), "x^2+2x+1");
}

#[test]
fn cube_complexe_en_zero() {
    // (3i)^3 = 27·i^3 = -27i
    let p = analyser("(x+3*i)^3");
    assert_eq!(p.degre(), 3);
    assert_eq!(p.evaluer(&Complexe::zero()).unwrap(), cpx("0", "-27"));
}

#[test]
fn derivation_monome_et_constante() {
    // d/dx x^4 = 4x^3
    let p = analyser("x^4");
    assert_eq!(p.deriver(), analyser("4*x^3"));
    // d/dx 5 = 0, degré 0
    let c = analyser("5");
    let d = c.deriver();
    assert_eq!(d.degre(), 0);
    assert!(d.est_nul());
}

#[test]
fn racines_annulent_le_polynome() {
    for texte in ["x^2-1", "2*x^2-x-1", "x^3-2*x^2-5*x+6", "x^2+x"] {
        let p = analyser(texte);
        match chercher_racines(&p) {
            RacinesRationnelles::Trouvees(racines) => {
                assert!(!racines.is_empty());
                for racine in racines {
                    let valeur = p.evaluer(&Complexe::reel(racine.clone())).unwrap();
                    assert!(
                        valeur.partie_reelle().est_nul(),
                        "{texte} : {racine} n'annule pas la partie réelle"
                    );
                }
            }
            RacinesRationnelles::Aucune => panic!("{texte} : racines attendues"),
        }
    }
}

/* ------------------------ Classification des échecs ------------------------ */

#[test]
fn division_par_le_zero_constant() {
    assert_eq!(
        Polynome::analyser("x/0", "x"),
        Err(ErreurComplexe::DivisionParZero.into())
    );
}

#[test]
fn parentheses_depareillees() {
    // '(' jamais refermée : parenthèse droite manquante
    assert_eq!(
        Polynome::analyser("(x+1", "x"),
        Err(ErreurOperateur::ParentheseDroiteManquante.into())
    );
    // ')' sans ouvrir : parenthèse gauche manquante
    assert_eq!(
        Polynome::analyser("x+1)", "x"),
        Err(ErreurOperateur::ParentheseGaucheManquante.into())
    );
}

#[test]
fn entree_vide() {
    assert_eq!(
        Polynome::analyser("", "x"),
        Err(ErreurPolynome::EntreeVide.into())
    );
}

#[test]
fn messages_fixes() {
    // chaque cause porte son message, stable et lisible
    assert_eq!(
        ErreurPolynome::EntreeVide.to_string(),
        "aucun polynôme fourni"
    );
    assert_eq!(
        ErreurOperateur::ParentheseDroiteManquante.to_string(),
        "parenthèse droite manquante"
    );
    assert_eq!(
        ErreurPolynome::OperandeDesequilibre.to_string(),
        "opérateur manquant"
    );
    assert_eq!(
        ErreurPolynome::OperateurDesequilibre.to_string(),
        "opérande manquante"
    );
}
