// src/noyau/erreurs.rs
//
// Erreurs typées du noyau : une enum de causes par composant,
// chaque cause portant son message fixe.
//
// Politique de propagation :
// - aucune récupération interne : la première cause remonte telle quelle
//   à l'appelant (parseur compris), sans résultat partiel ;
// - ErreurCalcul est l'enveloppe commune qui permet au parseur de
//   remonter n'importe quelle cause via `?` tout en la laissant
//   observable par `match`.

use thiserror::Error;

/* ------------------------ Rationnel ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurRationnel {
    #[error("le dénominateur ne peut pas être nul")]
    DivisionParZero,
    #[error("l'exposant doit être une valeur entière")]
    ExposantInvalide,
    #[error("entrée rationnelle illisible")]
    MauvaiseEntree,
}

/* ------------------------ Complexe ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurComplexe {
    #[error("division par un complexe nul")]
    DivisionParZero,
    #[error("l'exposant doit être un entier réel")]
    ExposantInvalide,
    #[error("forme complexe illisible (attendu : re ou re|im)")]
    JetonInvalide,
}

/* ------------------------ Operateur ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurOperateur {
    #[error("division par zéro impossible")]
    DivisionParZero,
    #[error("symbole inconnu : pas un opérateur")]
    PasUnOperateur,
    #[error("opérateur inapplicable")]
    OperationImpossible,
    #[error("parenthèse droite manquante")]
    ParentheseDroiteManquante,
    #[error("parenthèse gauche manquante")]
    ParentheseGaucheManquante,
}

/* ------------------------ Polynome ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurPolynome {
    #[error("parenthèse gauche manquante")]
    ParentheseGaucheManquante,
    #[error("opérande manquante")]
    OperateurDesequilibre,
    #[error("opérateur manquant")]
    OperandeDesequilibre,
    #[error("forme indéterminée (0^0)")]
    FormeIndeterminee,
    #[error("l'exposant doit être un entier constant (degré 0)")]
    ExposantInvalide,
    #[error("l'exposant doit être positif")]
    ExposantNegatif,
    #[error("la variable doit tenir sur un seul caractère")]
    VariableInvalide,
    #[error("aucun polynôme fourni")]
    EntreeVide,
    #[error("le diviseur doit être une constante (degré 0)")]
    DiviseurInvalide,
    #[error("jeton invalide : ni opérateur, ni variable, ni nombre")]
    JetonInvalide,
    #[error("modulo de polynômes non défini")]
    ModuloIndisponible,
}

/* ------------------------ Pile ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurPile {
    #[error("pile vide")]
    PileVide,
}

/* ------------------------ Enveloppe commune ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Rationnel(#[from] ErreurRationnel),
    #[error(transparent)]
    Complexe(#[from] ErreurComplexe),
    #[error(transparent)]
    Operateur(#[from] ErreurOperateur),
    #[error(transparent)]
    Polynome(#[from] ErreurPolynome),
    #[error(transparent)]
    Pile(#[from] ErreurPile),
}
