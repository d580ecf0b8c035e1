// src/noyau/polynome.rs
//
// Polynôme à coefficients complexes exacts, indexés par puissance
// croissante de la variable.
// Invariants :
// - coeffs.len() == degre + 1 ;
// - après toute construction, le coefficient de tête est non nul,
//   sauf au degré 0 (réduction).
//
// Les opérations arithmétiques rendent un polynôme portant la variable
// par défaut 'x' ; l'analyse textuelle estampille la variable demandée
// sur son résultat final et la dérivation la conserve.

use std::fmt;

use super::arith::Arithmetique;
use super::complexe::Complexe;
use super::erreurs::{ErreurCalcul, ErreurPolynome};
use super::rationnel::{entier_vers_i64, EXPOSANT_MAX};

pub(crate) const VARIABLE_DEFAUT: char = 'x';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynome {
    degre: usize,
    coeffs: Vec<Complexe>,
    variable: char,
}

impl Polynome {
    /* ------------------------ Constructeurs ------------------------ */

    /// Le polynôme nul (degré 0, coefficient 0).
    pub fn zero() -> Self {
        Self::constante(Complexe::zero())
    }

    /// Polynôme constant de degré 0.
    pub fn constante(valeur: Complexe) -> Self {
        Self {
            degre: 0,
            coeffs: vec![valeur],
            variable: VARIABLE_DEFAUT,
        }
    }

    /// Construit depuis les coefficients en ordre croissant de puissance
    /// (le premier est le terme constant), puis réduit.
    pub fn depuis_coeffs(coeffs: Vec<Complexe>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        let mut p = Self {
            degre: coeffs.len() - 1,
            coeffs,
            variable: VARIABLE_DEFAUT,
        };
        p.reduire();
        p
    }

    /// Le monôme variable (degré 1, coefficients [0, 1]).
    pub fn monome_variable() -> Self {
        Self::depuis_coeffs(vec![Complexe::zero(), Complexe::un()])
    }

    /// Analyse une expression textuelle (voir noyau::analyse).
    pub fn analyser(texte: &str, variable: &str) -> Result<Self, ErreurCalcul> {
        super::analyse::analyser(texte, variable)
    }

    /// Rend une copie portant la variable donnée.
    pub fn avec_variable(mut self, variable: char) -> Self {
        self.variable = variable;
        self
    }

    /* ------------------------ Accès ------------------------ */

    pub fn degre(&self) -> usize {
        self.degre
    }

    pub fn coefficients(&self) -> &[Complexe] {
        &self.coeffs
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    /// Vrai pour le polynôme nul (degré 0, coefficient 0).
    pub fn est_nul(&self) -> bool {
        self.degre == 0 && self.coeffs[0].est_nul()
    }

    /* ------------------------ Dérivation et évaluation ------------------------ */

    /// Dérivée terme à terme (règle des puissances). La dérivée d'un
    /// polynôme de degré 0 est le polynôme nul de degré 0.
    pub fn deriver(&self) -> Self {
        if self.degre == 0 {
            return Self::zero().avec_variable(self.variable);
        }
        let mut coeffs = Vec::with_capacity(self.degre);
        for i in 1..=self.degre {
            coeffs.push(self.coeffs[i].fois_entier(i as i64));
        }
        Self::depuis_coeffs(coeffs).avec_variable(self.variable)
    }

    /// Évaluation exacte au point donné, par la méthode de Horner
    /// (accumulation depuis le coefficient de tête).
    pub fn evaluer(&self, point: &Complexe) -> Result<Complexe, ErreurCalcul> {
        let mut res = Complexe::zero();
        for coeff in self.coeffs.iter().rev() {
            res = coeff.ajouter(&point.multiplier(&res)?)?;
        }
        Ok(res)
    }

    /* ------------------------ Réduction ------------------------ */

    /// Retire les coefficients de tête nuls jusqu'à retrouver un
    /// coefficient de tête non nul ou le degré 0.
    fn reduire(&mut self) {
        while self.degre > 0 && self.coeffs[self.degre].est_nul() {
            self.coeffs.pop();
            self.degre -= 1;
        }
    }
}

/* ------------------------ Contrat arithmétique ------------------------ */

impl Arithmetique for Polynome {
    /// Somme terme à terme, le plus court complété par des zéros.
    fn ajouter(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        let long = self.coeffs.len().max(autre.coeffs.len());
        let mut coeffs = Vec::with_capacity(long);
        for i in 0..long {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(Complexe::zero);
            let b = autre.coeffs.get(i).cloned().unwrap_or_else(Complexe::zero);
            coeffs.push(a.ajouter(&b)?);
        }
        Ok(Self::depuis_coeffs(coeffs))
    }

    fn soustraire(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        let long = self.coeffs.len().max(autre.coeffs.len());
        let mut coeffs = Vec::with_capacity(long);
        for i in 0..long {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(Complexe::zero);
            let b = autre.coeffs.get(i).cloned().unwrap_or_else(Complexe::zero);
            coeffs.push(a.soustraire(&b)?);
        }
        Ok(Self::depuis_coeffs(coeffs))
    }

    /// Produit par convolution des vecteurs de coefficients :
    /// res[i+j] += a[i]*b[j].
    fn multiplier(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        let mut coeffs = vec![Complexe::zero(); self.coeffs.len() + autre.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in autre.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].ajouter(&a.multiplier(b)?)?;
            }
        }
        Ok(Self::depuis_coeffs(coeffs))
    }

    /// Division par une constante (degré 0) seulement : chaque
    /// coefficient est divisé par le scalaire.
    fn diviser(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.degre > 0 {
            return Err(ErreurPolynome::DiviseurInvalide.into());
        }
        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        for coeff in &self.coeffs {
            coeffs.push(coeff.diviser(&autre.coeffs[0])?);
        }
        Ok(Self::depuis_coeffs(coeffs))
    }

    /// self^autre par multiplications répétées. L'exposant doit être une
    /// constante réelle, entière et positive ; 0^0 est une forme
    /// indéterminée ; l'exposant est borné par EXPOSANT_MAX.
    fn puissance(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if !autre.coeffs[0].partie_imaginaire().est_nul() {
            return Err(ErreurPolynome::ExposantInvalide.into());
        }
        if autre.degre > 0 {
            return Err(ErreurPolynome::ExposantInvalide.into());
        }
        if !autre.coeffs[0].partie_reelle().est_entier() {
            return Err(ErreurPolynome::ExposantInvalide.into());
        }
        if autre.coeffs[0].partie_reelle().est_negatif() {
            return Err(ErreurPolynome::ExposantNegatif.into());
        }
        let e = entier_vers_i64(autre.coeffs[0].partie_reelle().numerateur())
            .filter(|e| *e <= EXPOSANT_MAX)
            .ok_or(ErreurPolynome::ExposantInvalide)?;

        if self.est_nul() && e == 0 {
            return Err(ErreurPolynome::FormeIndeterminee.into());
        }
        if e == 0 {
            return Ok(Self::constante(Complexe::un()));
        }

        let mut res = self.clone();
        for _ in 1..e {
            res = res.multiplier(self)?;
        }
        Ok(res)
    }

    /// Pas de modulo défini sur les polynômes.
    fn modulo(&self, _autre: &Self) -> Result<Self, ErreurCalcul> {
        Err(ErreurPolynome::ModuloIndisponible.into())
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Polynome {
    /// Rendu canonique en degrés décroissants :
    /// - coefficient 1 élidé (sauf au terme constant), -1 rendu par un
    ///   signe seul ;
    /// - coefficient complexe entre parenthèses ;
    /// - suffixe d'exposant omis aux degrés 0 et 1 ;
    /// - « + » inséré quand le terme de rang inférieur commence positif.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degre == 0 {
            return write!(f, "{}", self.coeffs[0]);
        }

        let mut sortie = String::new();
        for i in (0..=self.degre).rev() {
            let coeff = &self.coeffs[i];
            if !coeff.est_nul() {
                if i != 0 && *coeff == Complexe::moins_un() {
                    sortie.push('-');
                } else if coeff.est_complexe() {
                    sortie.push('(');
                    sortie.push_str(&coeff.to_string());
                    sortie.push(')');
                } else if i == 0 || *coeff != Complexe::un() {
                    sortie.push_str(&coeff.to_string());
                }

                if i > 1 {
                    sortie.push(self.variable);
                    sortie.push('^');
                    sortie.push_str(&i.to_string());
                } else if i == 1 {
                    sortie.push(self.variable);
                }
            }

            if i != 0 {
                let suivant = &self.coeffs[i - 1];
                if suivant.partie_reelle().est_positif()
                    || suivant.partie_imaginaire().est_positif()
                    || suivant.est_complexe()
                {
                    sortie.push('+');
                }
            }
        }
        f.write_str(&sortie)
    }
}

/* ------------------------ Tests ------------------------ */
