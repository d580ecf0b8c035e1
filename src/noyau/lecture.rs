// src/noyau/lecture.rs
//
// Lecture décimale tronquée d'une valeur exacte, côté affichage
// seulement : le noyau ne manipule jamais de flottants. Le rationnel est
// projeté en entier “scalé” (×10^chiffres) par division entière, puis
// rendu en texte décimal.

use num_bigint::BigInt;
use num_traits::Signed;

use super::complexe::Complexe;
use super::rationnel::Rationnel;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^chiffres) en texte décimal tronqué.
fn entier_scale_en_texte(mut valeur: BigInt, chiffres: usize) -> String {
    let negatif = valeur.is_negative();
    if negatif {
        valeur = -valeur;
    }

    let echelle = pow10(chiffres);
    let partie_entiere = &valeur / &echelle;
    let partie_frac = &valeur % &echelle;

    if chiffres == 0 {
        return if negatif {
            format!("-{partie_entiere}")
        } else {
            format!("{partie_entiere}")
        };
    }

    let mut frac = partie_frac.to_str_radix(10);
    while frac.len() < chiffres {
        frac.insert(0, '0');
    }

    if negatif {
        format!("-{partie_entiere}.{frac}")
    } else {
        format!("{partie_entiere}.{frac}")
    }
}

/// r -> entier “scalé” = troncature de r * 10^chiffres.
fn rationnel_scale(r: &Rationnel, chiffres: usize) -> BigInt {
    let echelle = pow10(chiffres);
    (r.numerateur() * echelle) / r.denominateur()
}

/// Lecture décimale tronquée d'un rationnel.
pub fn rationnel_en_decimal(r: &Rationnel, chiffres: usize) -> String {
    entier_scale_en_texte(rationnel_scale(r, chiffres), chiffres)
}

/// Lecture décimale tronquée d'un complexe : "a", "bi" ou "a+bi"/"a-bi".
pub fn complexe_en_decimal(c: &Complexe, chiffres: usize) -> String {
    let re = rationnel_en_decimal(c.partie_reelle(), chiffres);
    let im = rationnel_en_decimal(c.partie_imaginaire(), chiffres);

    if c.est_reel() {
        re
    } else if c.est_imaginaire() {
        format!("{im}i")
    } else if c.partie_imaginaire().est_negatif() {
        // la partie imaginaire porte son propre signe
        format!("{re}{im}i")
    } else {
        format!("{re}+{im}i")
    }
}

/* ------------------------ Tests ------------------------ */
