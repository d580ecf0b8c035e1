// src/noyau/operateur.rs
//
// Opérateur binaire : un symbole du jeu fermé { + - * / % ^ ( ) } et son
// rang de précédence. La table est une fonction pure, pas un état partagé.
//
// precede() renvoie `self.precedence <= autre.precedence` : à précédence
// égale on dépile avant d'empiler le nouvel opérateur, d'où
// l'associativité à gauche.

use std::fmt;

use super::arith::Arithmetique;
use super::erreurs::{ErreurCalcul, ErreurOperateur};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operateur {
    symbole: char,
    precedence: u8,
}

/// Table de précédence du jeu d'opérateurs.
pub fn precedence_de(symbole: char) -> Option<u8> {
    match symbole {
        '(' | ')' => Some(0),
        '+' | '-' => Some(1),
        '*' | '/' | '%' => Some(2),
        '^' => Some(3),
        _ => None,
    }
}

/// Vrai si le caractère appartient au jeu d'opérateurs (parenthèses comprises).
pub fn est_operateur(symbole: char) -> bool {
    precedence_de(symbole).is_some()
}

impl Operateur {
    /// Construit l'opérateur depuis un symbole validé.
    pub fn nouveau(symbole: char) -> Result<Self, ErreurOperateur> {
        let precedence = precedence_de(symbole).ok_or(ErreurOperateur::PasUnOperateur)?;
        Ok(Self { symbole, precedence })
    }

    pub fn symbole(&self) -> char {
        self.symbole
    }

    /// Vrai si self doit être appliqué avant d'empiler `autre`
    /// (précédence inférieure ou égale).
    pub fn precede(&self, autre: &Operateur) -> bool {
        self.precedence <= autre.precedence
    }

    /// Applique l'opération binaire correspondant au symbole.
    ///
    /// `(` appliqué signifie qu'une parenthèse gauche a atteint
    /// l'évaluation sans être refermée : ParentheseDroiteManquante.
    pub fn appliquer<T: Arithmetique>(&self, gauche: &T, droite: &T) -> Result<T, ErreurCalcul> {
        match self.symbole {
            '+' => gauche.ajouter(droite),
            '-' => gauche.soustraire(droite),
            '*' => gauche.multiplier(droite),
            '/' => gauche.diviser(droite),
            '%' => gauche.modulo(droite),
            '^' => gauche.puissance(droite),
            '(' => Err(ErreurOperateur::ParentheseDroiteManquante.into()),
            _ => Err(ErreurOperateur::OperationImpossible.into()),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole)
    }
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::rationnel::Rationnel;

    fn op(c: char) -> Operateur {
        Operateur::nouveau(c).unwrap()
    }

    #[test]
    fn table_de_precedence() {
        assert_eq!(precedence_de('('), Some(0));
        assert_eq!(precedence_de(')'), Some(0));
        assert_eq!(precedence_de('+'), Some(1));
        assert_eq!(precedence_de('-'), Some(1));
        assert_eq!(precedence_de('*'), Some(2));
        assert_eq!(precedence_de('/'), Some(2));
        assert_eq!(precedence_de('%'), Some(2));
        assert_eq!(precedence_de('^'), Some(3));
        assert_eq!(precedence_de('x'), None);
    }

    #[test]
    fn symbole_inconnu_refuse() {
        assert_eq!(Operateur::nouveau('!'), Err(ErreurOperateur::PasUnOperateur));
    }

    #[test]
    fn precede_associativite_gauche() {
        // précédence égale : on dépile d'abord
        assert!(op('+').precede(&op('-')));
        assert!(op('*').precede(&op('/')));
        // précédence inférieure : on dépile aussi
        assert!(op('+').precede(&op('*')));
        // précédence supérieure : on garde
        assert!(!op('^').precede(&op('+')));
        // rien ne précède une parenthèse gauche (rang 0)
        assert!(!op('+').precede(&op('(')));
    }

    #[test]
    fn application_distribuee() {
        let deux = Rationnel::depuis_entier(2);
        let trois = Rationnel::depuis_entier(3);
        assert_eq!(
            op('+').appliquer(&deux, &trois).unwrap(),
            Rationnel::depuis_entier(5)
        );
        assert_eq!(
            op('-').appliquer(&deux, &trois).unwrap(),
            Rationnel::depuis_entier(-1)
        );
        assert_eq!(
            op('*').appliquer(&deux, &trois).unwrap(),
            Rationnel::depuis_entier(6)
        );
        assert_eq!(
            op('^').appliquer(&deux, &trois).unwrap(),
            Rationnel::depuis_entier(8)
        );
        assert_eq!(
            op('%').appliquer(&trois, &deux).unwrap(),
            Rationnel::depuis_entier(1)
        );
    }

    #[test]
    fn parenthese_gauche_appliquee() {
        let un = Rationnel::un();
        assert_eq!(
            op('(').appliquer(&un, &un),
            Err(ErreurOperateur::ParentheseDroiteManquante.into())
        );
    }
}
