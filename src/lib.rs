//! polynome_qpur — moteur polynomial exact (Q-pur)
//!
//! Analyse d'expressions algébriques (entiers, une variable, unité
//! imaginaire, + - * / ^ et parenthèses) vers des polynômes à
//! coefficients rationnels-complexes exacts, sans aucun flottant :
//! algèbre, dérivation, évaluation de Horner, racines rationnelles.
//!
//! Toute l'implémentation vit dans [`noyau`].

pub mod noyau;
