// src/noyau/complexe.rs
//
// Nombre complexe a+bi à composantes rationnelles exactes.
// Aucun invariant propre au-delà de la normalisation des composantes.
//
// Particularités héritées du contrat d'origine, conservées telles quelles :
// - puissance() multiplie (k-1) fois : un exposant 0 (ou négatif) rend la
//   base inchangée, pas l'identité 1 ;
// - modulo() applique un changement de signe aux deux composantes quand le
//   diviseur a une partie imaginaire non nulle.

use std::cmp::Ordering;
use std::fmt;

use super::arith::Arithmetique;
use super::erreurs::{ErreurCalcul, ErreurComplexe};
use super::rationnel::{entier_vers_i64, Rationnel, EXPOSANT_MAX};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Complexe {
    re: Rationnel,
    im: Rationnel,
}

impl Complexe {
    /* ------------------------ Constructeurs ------------------------ */

    pub fn zero() -> Self {
        Self {
            re: Rationnel::zero(),
            im: Rationnel::zero(),
        }
    }

    pub fn un() -> Self {
        Self::reel(Rationnel::un())
    }

    pub fn moins_un() -> Self {
        Self::reel(Rationnel::moins_un())
    }

    /// L'unité imaginaire 0+1i.
    pub fn unite_imaginaire() -> Self {
        Self {
            re: Rationnel::zero(),
            im: Rationnel::un(),
        }
    }

    /// Réel pur : partie imaginaire nulle.
    pub fn reel(re: Rationnel) -> Self {
        Self {
            re,
            im: Rationnel::zero(),
        }
    }

    pub fn nouveau(re: Rationnel, im: Rationnel) -> Self {
        Self { re, im }
    }

    /// Analyse un texte de la forme "re" ou "re|im", chaque composante au
    /// format rationnel "a" ou "a/b". Un troisième morceau : JetonInvalide.
    pub fn depuis_texte(texte: &str) -> Result<Self, ErreurCalcul> {
        let mut morceaux = texte.split(['|', ' ']).filter(|m| !m.is_empty());

        let re = match morceaux.next() {
            Some(m) => Rationnel::depuis_texte(m)?,
            None => return Err(ErreurComplexe::JetonInvalide.into()),
        };
        let im = match morceaux.next() {
            Some(m) => Rationnel::depuis_texte(m)?,
            None => Rationnel::zero(),
        };
        if morceaux.next().is_some() {
            return Err(ErreurComplexe::JetonInvalide.into());
        }

        Ok(Self { re, im })
    }

    /* ------------------------ Accès et classification ------------------------ */

    pub fn partie_reelle(&self) -> &Rationnel {
        &self.re
    }

    pub fn partie_imaginaire(&self) -> &Rationnel {
        &self.im
    }

    /// Partie imaginaire nulle (le zéro est réel).
    pub fn est_reel(&self) -> bool {
        self.im.est_nul()
    }

    /// Imaginaire pur : partie réelle nulle, partie imaginaire non nulle.
    pub fn est_imaginaire(&self) -> bool {
        self.re.est_nul() && !self.im.est_nul()
    }

    /// Les deux composantes non nulles.
    pub fn est_complexe(&self) -> bool {
        !self.re.est_nul() && !self.im.est_nul()
    }

    pub fn est_nul(&self) -> bool {
        self.re.est_nul() && self.im.est_nul()
    }

    /* ------------------------ Opérations unaires ------------------------ */

    /// Produit par un entier machine, composante par composante.
    pub fn fois_entier(&self, n: i64) -> Self {
        Self {
            re: self.re.fois_entier(n),
            im: self.im.fois_entier(n),
        }
    }

    /// Conjugué : signe de la partie imaginaire inversé.
    pub fn conjugue(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: self.im.oppose(),
        }
    }

    pub fn plafond(&self) -> Self {
        Self {
            re: self.re.plafond(),
            im: self.im.plafond(),
        }
    }

    pub fn plancher(&self) -> Self {
        Self {
            re: self.re.plancher(),
            im: self.im.plancher(),
        }
    }

    /// Ordre par module carré re²+im², comparé en quotients tronqués
    /// (mêmes réserves que Rationnel::comparer).
    pub fn comparer(&self, autre: &Self) -> Result<Ordering, ErreurCalcul> {
        let gauche = self
            .re
            .multiplier(&self.re)?
            .ajouter(&self.im.multiplier(&self.im)?)?;
        let droite = autre
            .re
            .multiplier(&autre.re)?
            .ajouter(&autre.im.multiplier(&autre.im)?)?;
        Ok(gauche.comparer(&droite))
    }
}

/* ------------------------ Contrat arithmétique ------------------------ */

impl Arithmetique for Complexe {
    fn ajouter(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        Ok(Self {
            re: self.re.ajouter(&autre.re)?,
            im: self.im.ajouter(&autre.im)?,
        })
    }

    fn soustraire(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        Ok(Self {
            re: self.re.soustraire(&autre.re)?,
            im: self.im.soustraire(&autre.im)?,
        })
    }

    /// Produit standard : (a+bi)(c+di) = (ac-bd) + (bc+ad)i.
    fn multiplier(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        Ok(Self {
            re: self
                .re
                .multiplier(&autre.re)?
                .soustraire(&self.im.multiplier(&autre.im)?)?,
            im: self
                .im
                .multiplier(&autre.re)?
                .ajouter(&self.re.multiplier(&autre.im)?)?,
        })
    }

    /// Quotient par le conjugué : diviseur réel re²+im².
    fn diviser(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.est_nul() {
            return Err(ErreurComplexe::DivisionParZero.into());
        }
        let con = autre.conjugue();
        let diviseur = autre
            .re
            .multiplier(&autre.re)?
            .ajouter(&autre.im.multiplier(&autre.im)?)?;

        Ok(Self {
            re: self
                .re
                .multiplier(&autre.re)?
                .soustraire(&self.im.multiplier(&con.im)?)?
                .diviser(&diviseur)?,
            im: self
                .im
                .multiplier(&autre.re)?
                .ajouter(&self.re.multiplier(&con.im)?)?
                .diviser(&diviseur)?,
        })
    }

    /// self^autre par multiplications répétées (k-1 fois).
    /// L'exposant doit être réel et entier ; borné par EXPOSANT_MAX.
    fn puissance(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if !autre.im.est_nul() {
            return Err(ErreurComplexe::ExposantInvalide.into());
        }
        if !autre.re.est_entier() {
            return Err(ErreurComplexe::ExposantInvalide.into());
        }
        let k = entier_vers_i64(autre.re.numerateur())
            .filter(|k| *k <= EXPOSANT_MAX)
            .ok_or(ErreurComplexe::ExposantInvalide)?;

        let mut res = self.clone();
        let mut i = 1;
        while i < k {
            res = res.multiplier(self)?;
            i += 1;
        }
        Ok(res)
    }

    /// Modulo composante par composante sur le réel du diviseur ; quand le
    /// diviseur a une partie imaginaire non nulle, chaque composante est
    /// prise modulo la composante homologue puis changée de signe.
    fn modulo(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.im.est_nul() {
            Ok(Self {
                re: self.re.modulo(&autre.re)?,
                im: self.im.modulo(&autre.re)?,
            })
        } else {
            Ok(Self {
                re: self.re.modulo(&autre.re)?.multiplier(&Rationnel::moins_un())?,
                im: self.im.modulo(&autre.im)?.multiplier(&Rationnel::moins_un())?,
            })
        }
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Complexe {
    /// Trois formes : réel pur "a", imaginaire pur "bi" (coefficient ±1
    /// élidé), combinée "a+bi"/"a-bi" avec la même élision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.est_complexe() {
            if self.im == Rationnel::un() {
                write!(f, "{}+i", self.re)
            } else if self.im == Rationnel::moins_un() {
                write!(f, "{}-i", self.re)
            } else if self.im.est_positif() {
                write!(f, "{}+{}i", self.re, self.im)
            } else {
                // la partie imaginaire porte son propre signe
                write!(f, "{}{}i", self.re, self.im)
            }
        } else if self.est_imaginaire() {
            if self.im == Rationnel::un() {
                write!(f, "i")
            } else if self.im == Rationnel::moins_un() {
                write!(f, "-i")
            } else {
                write!(f, "{}i", self.im)
            }
        } else {
            write!(f, "{}", self.re)
        }
    }
}

/* ------------------------ Tests ------------------------ */
