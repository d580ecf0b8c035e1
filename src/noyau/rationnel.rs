// src/noyau/rationnel.rs
//
// Fraction exacte a/b sur grands entiers.
// Invariants (portés par BigRational::new) :
// - dénominateur > 0 ;
// - pgcd(|num|, den) = 1 après chaque opération ;
// - zéro représenté 0/1.
//
// Particularités héritées du contrat d'origine, conservées telles quelles :
// - plancher/plafond travaillent en division entière TRONQUÉE (vers zéro),
//   pas en plancher mathématique ;
// - comparer() compare les quotients entiers tronqués num/den, pas l'ordre
//   exact des fractions (voir tests).

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::arith::Arithmetique;
use super::erreurs::{ErreurCalcul, ErreurRationnel};

/// Garde-fou commun sur les exposants entiers (anti-gel).
pub(crate) const EXPOSANT_MAX: i64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rationnel {
    valeur: BigRational,
}

impl Rationnel {
    /* ------------------------ Constructeurs ------------------------ */

    pub fn zero() -> Self {
        Self {
            valeur: BigRational::zero(),
        }
    }

    pub fn un() -> Self {
        Self {
            valeur: BigRational::one(),
        }
    }

    pub fn moins_un() -> Self {
        Self {
            valeur: -BigRational::one(),
        }
    }

    /// Entier n, soit n/1.
    pub fn depuis_entier(n: i64) -> Self {
        Self {
            valeur: BigRational::from_integer(BigInt::from(n)),
        }
    }

    /// Fraction num/den, normalisée à la construction.
    pub fn nouveau(num: BigInt, den: BigInt) -> Result<Self, ErreurRationnel> {
        if den.is_zero() {
            return Err(ErreurRationnel::DivisionParZero);
        }
        Ok(Self {
            valeur: BigRational::new(num, den),
        })
    }

    /// Analyse un texte de la forme "a" ou "a/b" (espaces tolérés).
    ///
    /// - plus de deux morceaux, ou aucun : MauvaiseEntree ;
    /// - dénominateur nul : DivisionParZero.
    pub fn depuis_texte(texte: &str) -> Result<Self, ErreurRationnel> {
        let morceaux: Vec<&str> = texte
            .split(['/', ' '])
            .filter(|m| !m.is_empty())
            .collect();
        if morceaux.is_empty() || morceaux.len() > 2 {
            return Err(ErreurRationnel::MauvaiseEntree);
        }

        let num = BigInt::parse_bytes(morceaux[0].as_bytes(), 10)
            .ok_or(ErreurRationnel::MauvaiseEntree)?;

        let den = match morceaux.get(1) {
            Some(m) => {
                let d = BigInt::parse_bytes(m.as_bytes(), 10)
                    .ok_or(ErreurRationnel::MauvaiseEntree)?;
                if d.is_zero() {
                    return Err(ErreurRationnel::DivisionParZero);
                }
                d
            }
            None => BigInt::one(),
        };

        Ok(Self {
            valeur: BigRational::new(num, den),
        })
    }

    /* ------------------------ Accès ------------------------ */

    pub fn numerateur(&self) -> &BigInt {
        self.valeur.numer()
    }

    pub fn denominateur(&self) -> &BigInt {
        self.valeur.denom()
    }

    pub fn est_nul(&self) -> bool {
        self.valeur.is_zero()
    }

    pub fn est_positif(&self) -> bool {
        self.valeur.numer().is_positive()
    }

    pub fn est_negatif(&self) -> bool {
        self.valeur.numer().is_negative()
    }

    /// Vrai si la fraction est un entier (dénominateur 1).
    pub fn est_entier(&self) -> bool {
        self.valeur.denom().is_one()
    }

    /* ------------------------ Opérations unaires ------------------------ */

    pub fn oppose(&self) -> Self {
        Self {
            valeur: -self.valeur.clone(),
        }
    }

    /// Produit par un entier machine (jamais d'échec, utilisé par la
    /// dérivation et la recherche de racines).
    pub fn fois_entier(&self, n: i64) -> Self {
        Self {
            valeur: self.valeur.clone() * BigInt::from(n),
        }
    }

    /// Arrondi vers le bas : division entière tronquée, dénominateur forcé à 1.
    /// Pour un numérateur négatif la troncature remonte vers zéro (politique
    /// du contrat d'origine, conservée).
    pub fn plancher(&self) -> Self {
        if self.est_entier() {
            return self.clone();
        }
        Self {
            valeur: BigRational::from_integer(self.valeur.numer() / self.valeur.denom()),
        }
    }

    /// Arrondi vers le haut : quotient tronqué plus un, seulement quand le
    /// dénominateur n'est pas déjà 1.
    pub fn plafond(&self) -> Self {
        if self.est_entier() {
            return self.clone();
        }
        Self {
            valeur: BigRational::from_integer(
                self.valeur.numer() / self.valeur.denom() + BigInt::one(),
            ),
        }
    }

    /// Ordre par quotients entiers tronqués (1/2 et 1/3 se comparent égaux).
    /// Volontairement PAS un impl de Ord : ce n'est pas un ordre total
    /// cohérent avec l'égalité structurelle.
    pub fn comparer(&self, autre: &Self) -> Ordering {
        let gauche = self.valeur.numer() / self.valeur.denom();
        let droite = autre.valeur.numer() / autre.valeur.denom();
        gauche.cmp(&droite)
    }
}

/* ------------------------ Contrat arithmétique ------------------------ */

impl Arithmetique for Rationnel {
    fn ajouter(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        Ok(Self {
            valeur: &self.valeur + &autre.valeur,
        })
    }

    fn soustraire(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        Ok(Self {
            valeur: &self.valeur - &autre.valeur,
        })
    }

    fn multiplier(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        Ok(Self {
            valeur: &self.valeur * &autre.valeur,
        })
    }

    fn diviser(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.valeur.is_zero() {
            return Err(ErreurRationnel::DivisionParZero.into());
        }
        Ok(Self {
            valeur: &self.valeur / &autre.valeur,
        })
    }

    /// self^autre, exposant entier seulement (dénominateur 1), borné par
    /// EXPOSANT_MAX. Exposant négatif : inversion (base nulle interdite).
    fn puissance(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if !autre.est_entier() {
            return Err(ErreurRationnel::ExposantInvalide.into());
        }
        let k = entier_vers_i64(autre.numerateur())
            .filter(|k| k.abs() <= EXPOSANT_MAX)
            .ok_or(ErreurRationnel::ExposantInvalide)?;
        if k < 0 && self.est_nul() {
            return Err(ErreurRationnel::DivisionParZero.into());
        }
        Ok(Self {
            valeur: puissance_entiere(self.valeur.clone(), k),
        })
    }

    /// a mod b = a - b*plancher(a/b), exact (plancher tronqué, comme plus haut).
    fn modulo(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        let quotient = self.diviser(autre)?.plancher();
        self.soustraire(&autre.multiplier(&quotient)?)
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Rationnel {
    /// "a" si le dénominateur vaut 1, sinon "a/b".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.valeur.numer();
        let d = self.valeur.denom();
        if d.is_one() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

/* ------------------------ Outils entiers partagés ------------------------ */

/// Conversion SAFE vers i64 (refuse au lieu de tronquer).
pub(crate) fn entier_vers_i64(x: &BigInt) -> Option<i64> {
    x.to_string().parse::<i64>().ok()
}

/// Exponentiation binaire sur rationnel, exposant signé.
fn puissance_entiere(base: BigRational, exp: i64) -> BigRational {
    if exp == 0 {
        return BigRational::one();
    }
    if exp < 0 {
        let pos = puissance_entiere(base, -exp);
        return BigRational::one() / pos;
    }

    let mut e = exp as u64;
    let mut acc = BigRational::one();
    let mut b = base;

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(texte: &str) -> Rationnel {
        Rationnel::depuis_texte(texte).unwrap_or_else(|e| panic!("rat({texte:?}) : {e}"))
    }

    #[test]
    fn normalisation_pgcd_et_signe() {
        let r = Rationnel::nouveau(BigInt::from(4), BigInt::from(-6)).unwrap();
        assert_eq!(r.numerateur(), &BigInt::from(-2));
        assert_eq!(r.denominateur(), &BigInt::from(3));

        let z = Rationnel::nouveau(BigInt::from(0), BigInt::from(7)).unwrap();
        assert_eq!(z, Rationnel::zero());
        assert_eq!(z.denominateur(), &BigInt::from(1));
    }

    #[test]
    fn texte_aller_retour() {
        for texte in ["3", "-3", "1/2", "-7/3", "10/4"] {
            let r = rat(texte);
            assert_eq!(rat(&r.to_string()), r, "aller-retour {texte:?}");
        }
    }

    #[test]
    fn texte_refuse() {
        assert_eq!(
            Rationnel::depuis_texte("1/2/3"),
            Err(ErreurRationnel::MauvaiseEntree)
        );
        assert_eq!(
            Rationnel::depuis_texte(""),
            Err(ErreurRationnel::MauvaiseEntree)
        );
        assert_eq!(
            Rationnel::depuis_texte("abc"),
            Err(ErreurRationnel::MauvaiseEntree)
        );
        assert_eq!(
            Rationnel::depuis_texte("1/0"),
            Err(ErreurRationnel::DivisionParZero)
        );
    }

    #[test]
    fn somme_et_produit() {
        assert_eq!(rat("1/2").ajouter(&rat("1/3")).unwrap(), rat("5/6"));
        assert_eq!(rat("2/3").multiplier(&rat("3/4")).unwrap(), rat("1/2"));
        // commutativité
        assert_eq!(
            rat("1/2").ajouter(&rat("1/3")).unwrap(),
            rat("1/3").ajouter(&rat("1/2")).unwrap()
        );
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(
            rat("1").diviser(&Rationnel::zero()),
            Err(ErreurRationnel::DivisionParZero.into())
        );
    }

    #[test]
    fn plancher_plafond_troncature() {
        // division tronquée : -7/2 -> -3 (et non -4)
        assert_eq!(rat("-7/2").plancher(), rat("-3"));
        assert_eq!(rat("7/2").plancher(), rat("3"));
        // plafond = quotient tronqué + 1 dès que den != 1
        assert_eq!(rat("7/2").plafond(), rat("4"));
        assert_eq!(rat("-7/2").plafond(), rat("-2"));
        // entier : inchangé
        assert_eq!(rat("5").plancher(), rat("5"));
        assert_eq!(rat("5").plafond(), rat("5"));
    }

    #[test]
    fn comparer_quotients_tronques() {
        // 1/2 et 1/3 tronquent tous deux vers 0 : "égaux" pour cet ordre
        assert_eq!(rat("1/2").comparer(&rat("1/3")), Ordering::Equal);
        assert_eq!(rat("7/2").comparer(&rat("3/2")), Ordering::Greater);
        assert_eq!(rat("-5").comparer(&rat("1")), Ordering::Less);
    }

    #[test]
    fn modulo_exact() {
        assert_eq!(rat("7/2").modulo(&rat("2")).unwrap(), rat("3/2"));
        assert_eq!(rat("5").modulo(&rat("3")).unwrap(), rat("2"));
        assert_eq!(
            rat("1").modulo(&Rationnel::zero()),
            Err(ErreurRationnel::DivisionParZero.into())
        );
    }

    #[test]
    fn puissance_entiere_seulement() {
        assert_eq!(rat("2/3").puissance(&rat("3")).unwrap(), rat("8/27"));
        assert_eq!(rat("2").puissance(&rat("0")).unwrap(), rat("1"));
        assert_eq!(rat("2").puissance(&rat("-2")).unwrap(), rat("1/4"));
        assert_eq!(
            rat("2").puissance(&rat("1/2")),
            Err(ErreurRationnel::ExposantInvalide.into())
        );
        assert_eq!(
            Rationnel::zero().puissance(&rat("-1")),
            Err(ErreurRationnel::DivisionParZero.into())
        );
    }

    #[test]
    fn oppose_et_signes() {
        assert_eq!(rat("1/2").oppose(), rat("-1/2"));
        assert!(rat("1/2").est_positif());
        assert!(rat("-1/2").est_negatif());
        assert!(!Rationnel::zero().est_positif());
        assert!(!Rationnel::zero().est_negatif());
    }
}
