// src/noyau/analyse.rs
//
// Analyse d'une expression infixe vers un Polynome, par double pile
// (opérateurs / opérandes) et table de précédence.
//
// Règles :
// - alternance opérande/opérateur surveillée par `dernier_operande` ;
// - un '-' en toute première position réécrit l'entrée : on empile la
//   constante -1 et l'opérateur '*' ;
// - ')' dépile-et-applique jusqu'à la '(' correspondante ; toute erreur
//   d'application y devient OperateurDesequilibre, une pile d'opérateurs
//   épuisée devient ParentheseGaucheManquante ;
// - à la fin, vidage de la pile d'opérateurs : une sous-alimentation de
//   la pile d'opérandes devient OperateurDesequilibre, les autres causes
//   (division par zéro, '(' restée en pile...) remontent telles quelles.

use super::complexe::Complexe;
use super::erreurs::{ErreurCalcul, ErreurOperateur, ErreurPolynome};
use super::jetons::{decouper, Jeton};
use super::operateur::Operateur;
use super::pile::Pile;
use super::polynome::{Polynome, VARIABLE_DEFAUT};

/// Analyse `texte` avec le symbole de variable donné ("x" par défaut
/// ailleurs). Le symbole doit tenir sur un caractère.
pub fn analyser(texte: &str, variable: &str) -> Result<Polynome, ErreurCalcul> {
    if variable.chars().count() > 1 {
        return Err(ErreurPolynome::VariableInvalide.into());
    }
    let var_car = variable.chars().next();

    let mut operateurs: Pile<Operateur> = Pile::nouvelle();
    let mut operandes: Pile<Polynome> = Pile::nouvelle();
    let mut dernier_operande = false;

    let jetons = decouper(texte, var_car);
    let mut restants = jetons.iter();

    // Un moins en tête : l'opérande qui suit est lu comme négatif.
    if texte.starts_with('-') {
        restants.next();
        operandes.empiler(Polynome::constante(Complexe::moins_un()));
        operateurs.empiler(Operateur::nouveau('*')?);
    }

    for jeton in restants {
        match jeton {
            Jeton::Variable => {
                if dernier_operande {
                    return Err(ErreurPolynome::OperandeDesequilibre.into());
                }
                operandes.empiler(Polynome::monome_variable());
                dernier_operande = true;
            }

            Jeton::Imaginaire => {
                if dernier_operande {
                    return Err(ErreurPolynome::OperandeDesequilibre.into());
                }
                operandes.empiler(Polynome::constante(Complexe::unite_imaginaire()));
                dernier_operande = true;
            }

            Jeton::ParG => {
                if dernier_operande {
                    return Err(ErreurPolynome::OperandeDesequilibre.into());
                }
                operateurs.empiler(Operateur::nouveau('(')?);
            }

            Jeton::ParD => {
                // dépile-et-applique jusqu'à la parenthèse gauche
                while !operateurs.est_vide() && operateurs.sommet()?.symbole() != '(' {
                    if operer(&mut operateurs, &mut operandes).is_err() {
                        return Err(ErreurPolynome::OperateurDesequilibre.into());
                    }
                }
                if operateurs.est_vide() {
                    return Err(ErreurOperateur::ParentheseGaucheManquante.into());
                }
                operateurs.depiler()?;
            }

            Jeton::Plus | Jeton::Moins | Jeton::Etoile | Jeton::Barre | Jeton::Accent => {
                if !dernier_operande {
                    return Err(ErreurPolynome::OperateurDesequilibre.into());
                }
                let op = Operateur::nouveau(jeton.symbole().unwrap_or(' '))?;
                while !operateurs.est_vide() && op.precede(operateurs.sommet()?) {
                    operer(&mut operateurs, &mut operandes)?;
                }
                operateurs.empiler(op);
                dernier_operande = false;
            }

            Jeton::Nombre(brut) => {
                if dernier_operande {
                    return Err(ErreurPolynome::OperandeDesequilibre.into());
                }
                operandes.empiler(Polynome::constante(Complexe::depuis_texte(brut)?));
                dernier_operande = true;
            }
        }
    }

    // vidage final
    while !operateurs.est_vide() {
        match operer(&mut operateurs, &mut operandes) {
            Ok(()) => {}
            Err(ErreurCalcul::Pile(_)) => {
                return Err(ErreurPolynome::OperateurDesequilibre.into())
            }
            Err(autre) => return Err(autre),
        }
    }

    if operandes.est_vide() {
        return Err(ErreurPolynome::EntreeVide.into());
    }
    let resultat = operandes.depiler()?;
    if !operandes.est_vide() {
        return Err(ErreurPolynome::OperateurDesequilibre.into());
    }

    Ok(resultat.avec_variable(var_car.unwrap_or(VARIABLE_DEFAUT)))
}

/// Dépile un opérateur et deux opérandes (droite d'abord), applique,
/// rempile le résultat. Une '(' dépiler ici signale une parenthèse
/// jamais refermée.
fn operer(
    operateurs: &mut Pile<Operateur>,
    operandes: &mut Pile<Polynome>,
) -> Result<(), ErreurCalcul> {
    let op = operateurs.depiler()?;
    if op.symbole() == '(' {
        return Err(ErreurOperateur::ParentheseDroiteManquante.into());
    }
    let droite = operandes.depiler()?;
    let gauche = operandes.depiler()?;
    operandes.empiler(op.appliquer(&gauche, &droite)?);
    Ok(())
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::erreurs::{ErreurComplexe, ErreurRationnel};
    use crate::noyau::rationnel::Rationnel;

    fn analyser_x(texte: &str) -> Result<Polynome, ErreurCalcul> {
        analyser(texte, "x")
    }

    fn reel(texte: &str) -> Complexe {
        Complexe::reel(Rationnel::depuis_texte(texte).unwrap())
    }

    fn poly(coeffs: &[&str]) -> Polynome {
        Polynome::depuis_coeffs(coeffs.iter().map(|c| reel(c)).collect())
    }

    #[test]
    fn constante_additionnee() {
        let p = analyser_x("3+4").unwrap();
        assert_eq!(p, poly(&["7"]));
        assert_eq!(p.degre(), 0);
    }

    #[test]
    fn trinome_complet() {
        let p = analyser_x("x^2+2*x+1").unwrap();
        assert_eq!(p.degre(), 2);
        assert_eq!(p, poly(&["1", "2", "1"]));
        assert_eq!(p.to_string(), "x^2+2x+1");
    }

    #[test]
    fn precedence_et_associativite() {
        // 2+3*4 = 14, pas 20
        assert_eq!(analyser_x("2+3*4").unwrap(), poly(&["14"]));
        // 2-3-4 = -5 (associativité à gauche)
        assert_eq!(analyser_x("2-3-4").unwrap(), poly(&["-5"]));
        // 12/2/3 = 2
        assert_eq!(analyser_x("12/2/3").unwrap(), poly(&["2"]));
        // parenthèses prioritaires : (2+3)*4 = 20
        assert_eq!(analyser_x("(2+3)*4").unwrap(), poly(&["20"]));
    }

    #[test]
    fn moins_en_tete() {
        assert_eq!(analyser_x("-x").unwrap(), poly(&["0", "-1"]));
        assert_eq!(analyser_x("-3+5").unwrap(), poly(&["2"]));
    }

    #[test]
    fn cube_binome_complexe() {
        // (x+3i)^3 : degré 3 ; en x=0, (3i)^3 = -27i
        let p = analyser_x("(x+3*i)^3").unwrap();
        assert_eq!(p.degre(), 3);
        let valeur = p.evaluer(&Complexe::zero()).unwrap();
        assert_eq!(
            valeur,
            Complexe::nouveau(Rationnel::zero(), Rationnel::depuis_entier(-27))
        );
    }

    #[test]
    fn variable_personnalisee() {
        let p = Polynome::analyser("t^2+1", "t").unwrap();
        assert_eq!(p.degre(), 2);
        assert_eq!(p.variable(), 't');
        assert_eq!(p.to_string(), "t^2+1");
        assert_eq!(
            Polynome::analyser("x+1", "xy"),
            Err(ErreurPolynome::VariableInvalide.into())
        );
    }

    #[test]
    fn alternance_surveillee() {
        // deux opérandes consécutives
        assert_eq!(
            analyser_x("x x"),
            Err(ErreurPolynome::OperandeDesequilibre.into())
        );
        assert_eq!(
            analyser_x("2 3"),
            Err(ErreurPolynome::OperandeDesequilibre.into())
        );
        assert_eq!(
            analyser_x("x i"),
            Err(ErreurPolynome::OperandeDesequilibre.into())
        );
        // opérande puis '('
        assert_eq!(
            analyser_x("2(x)"),
            Err(ErreurPolynome::OperandeDesequilibre.into())
        );
        // deux opérateurs consécutifs
        assert_eq!(
            analyser_x("x+*2"),
            Err(ErreurPolynome::OperateurDesequilibre.into())
        );
        // opérateur en tête (hors moins initial)
        assert_eq!(
            analyser_x("*2"),
            Err(ErreurPolynome::OperateurDesequilibre.into())
        );
        // opérateur en queue
        assert_eq!(
            analyser_x("x+"),
            Err(ErreurPolynome::OperateurDesequilibre.into())
        );
    }

    #[test]
    fn parentheses_desequilibrees() {
        // '(' jamais refermée : elle atteint l'évaluation au vidage final
        assert_eq!(
            analyser_x("(x+1"),
            Err(ErreurOperateur::ParentheseDroiteManquante.into())
        );
        // ')' sans '(' : la pile d'opérateurs s'épuise
        assert_eq!(
            analyser_x("x+1)"),
            Err(ErreurOperateur::ParentheseGaucheManquante.into())
        );
    }

    #[test]
    fn entree_vide_ou_blanche() {
        assert_eq!(analyser_x(""), Err(ErreurPolynome::EntreeVide.into()));
        assert_eq!(analyser_x("   "), Err(ErreurPolynome::EntreeVide.into()));
        assert_eq!(analyser_x("()"), Err(ErreurPolynome::EntreeVide.into()));
    }

    #[test]
    fn division_par_zero_au_vidage() {
        assert_eq!(
            analyser_x("x/0"),
            Err(ErreurComplexe::DivisionParZero.into())
        );
        assert_eq!(
            analyser_x("5/0"),
            Err(ErreurComplexe::DivisionParZero.into())
        );
        // entre parenthèses, l'échec d'application est requalifié
        assert_eq!(
            analyser_x("(5/0)"),
            Err(ErreurPolynome::OperateurDesequilibre.into())
        );
    }

    #[test]
    fn litteral_illisible() {
        assert_eq!(
            analyser_x("2.5+x"),
            Err(ErreurRationnel::MauvaiseEntree.into())
        );
        assert_eq!(
            analyser_x("abc"),
            Err(ErreurRationnel::MauvaiseEntree.into())
        );
    }

    #[test]
    fn espaces_tolerees() {
        assert_eq!(analyser_x(" x ^ 2 + 1 ").unwrap(), poly(&["1", "0", "1"]));
    }
}
