// src/noyau/racines.rs
//
// Recherche des racines rationnelles d'un polynôme.
//
// Méthode : ppcm des dénominateurs des parties réelles pour chasser les
// dénominateurs, puis énumération des facteurs entiers du plus bas
// coefficient non nul (avec signes) et du coefficient de tête (sans
// signes) ; chaque candidat p/q est évalué exactement et retenu quand la
// partie réelle de l'évaluation est exactement nulle. Zéro est inscrit
// d'office en tête quand le terme constant est nul.
//
// Les coefficients sont ramenés en entiers machine par conversion SAFE :
// hors gamme, la recherche répond Aucune plutôt que d'énumérer des
// facteurs de grands entiers.

use std::fmt;

use super::complexe::Complexe;
use super::polynome::Polynome;
use super::rationnel::{entier_vers_i64, Rationnel};

/// Résultat explicite de la recherche : des racines, ou aucune.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RacinesRationnelles {
    Trouvees(Vec<Rationnel>),
    Aucune,
}

impl fmt::Display for RacinesRationnelles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RacinesRationnelles::Aucune => write!(f, "aucune racine rationnelle"),
            RacinesRationnelles::Trouvees(racines) => {
                for (rang, racine) in racines.iter().enumerate() {
                    if rang > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{racine}")?;
                }
                Ok(())
            }
        }
    }
}

/// Cherche les racines rationnelles de `polynome`.
pub fn chercher_racines(polynome: &Polynome) -> RacinesRationnelles {
    // degré 0 : pas d'espace de recherche ; la constante nulle a 0 pour
    // racine, les autres n'en ont pas
    if polynome.degre() == 0 {
        if polynome.est_nul() {
            return RacinesRationnelles::Trouvees(vec![Rationnel::zero()]);
        }
        return RacinesRationnelles::Aucune;
    }

    // dénominateurs des parties réelles, en entiers machine
    let mut denominateurs = Vec::with_capacity(polynome.degre() + 1);
    for coeff in polynome.coefficients() {
        match entier_vers_i64(coeff.partie_reelle().denominateur()) {
            Some(d) => denominateurs.push(d),
            None => return RacinesRationnelles::Aucune,
        }
    }
    let ppcm = match ppcm_tous(&denominateurs) {
        Some(v) => v,
        None => return RacinesRationnelles::Aucune,
    };

    // chasse les dénominateurs
    let coeffs: Vec<Complexe> = polynome
        .coefficients()
        .iter()
        .map(|c| c.fois_entier(ppcm))
        .collect();

    let mut racines: Vec<Rationnel> = Vec::new();
    if coeffs[0].est_nul() {
        racines.push(Rationnel::zero());
    }

    // factorise les termes en x communs
    let mut decalage = 0;
    while decalage < polynome.degre() && coeffs[decalage].est_nul() {
        decalage += 1;
    }

    // p : facteurs du plus bas coefficient non nul (signés)
    // q : facteurs du coefficient de tête (non signés)
    let bas = match entier_vers_i64(coeffs[decalage].partie_reelle().numerateur()) {
        Some(v) => v,
        None => return RacinesRationnelles::Aucune,
    };
    let haut = match entier_vers_i64(coeffs[polynome.degre()].partie_reelle().numerateur()) {
        Some(v) => v,
        None => return RacinesRationnelles::Aucune,
    };
    let facteurs_p = facteurs(bas, true);
    let facteurs_q = facteurs(haut, false);

    // évalue le polynôme réduit en chaque p/q
    let temp = Polynome::depuis_coeffs(coeffs);
    for &p in &facteurs_p {
        for &q in &facteurs_q {
            if q == 0 {
                continue;
            }
            let candidat = match Rationnel::nouveau(p.into(), q.into()) {
                Ok(r) => r,
                Err(_) => continue,
            };
            if let Ok(valeur) = temp.evaluer(&Complexe::reel(candidat.clone())) {
                if valeur.partie_reelle().est_nul() && !racines.contains(&candidat) {
                    racines.push(candidat);
                }
            }
        }
    }

    if racines.is_empty() {
        RacinesRationnelles::Aucune
    } else {
        RacinesRationnelles::Trouvees(racines)
    }
}

/* ------------------------ Outils entiers ------------------------ */

/// Plus grand commun diviseur (Euclide).
pub(crate) fn pgcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        pgcd(b, a % b)
    }
}

/// Plus petit commun multiple de deux valeurs, None sur débordement.
pub(crate) fn ppcm(a: i64, b: i64) -> Option<i64> {
    let g = pgcd(a, b);
    if g == 0 {
        return Some(0);
    }
    Some(a.checked_mul(b)?.abs() / g)
}

/// Plus petit commun multiple d'une suite ; 1 pour une suite d'un seul
/// élément (un seul dénominateur : rien à chasser de plus).
pub(crate) fn ppcm_tous(valeurs: &[i64]) -> Option<i64> {
    if valeurs.len() == 1 {
        return Some(1);
    }
    let mut acc = ppcm(valeurs[valeurs.len() - 1], valeurs[valeurs.len() - 2])?;
    for &v in valeurs[..valeurs.len() - 2].iter().rev() {
        acc = ppcm(acc, v)?;
    }
    Some(acc)
}

/// Facteurs entiers de |x|, x lui-même en tête, puis en descendant depuis
/// x/2 ; les opposés sont intercalés quand `avec_negatifs` est vrai.
pub(crate) fn facteurs(x: i64, avec_negatifs: bool) -> Vec<i64> {
    let x = x.abs();
    let mut sortie = vec![x];
    if avec_negatifs && x != 0 {
        sortie.push(-x);
    }

    let mut i = x / 2;
    loop {
        if i != 0 && x % i == 0 {
            sortie.push(i);
            if avec_negatifs {
                sortie.push(-i);
            }
        }
        if i <= 1 {
            break;
        }
        i -= 1;
    }
    sortie
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(texte: &str) -> Rationnel {
        Rationnel::depuis_texte(texte).unwrap()
    }

    fn poly(coeffs: &[&str]) -> Polynome {
        Polynome::depuis_coeffs(
            coeffs
                .iter()
                .map(|c| Complexe::reel(rat(c)))
                .collect(),
        )
    }

    #[test]
    fn outils_entiers() {
        assert_eq!(pgcd(12, 18), 6);
        assert_eq!(ppcm(4, 6), Some(12));
        assert_eq!(ppcm_tous(&[2, 3, 4]), Some(12));
        assert_eq!(ppcm_tous(&[7]), Some(1));
        assert_eq!(facteurs(6, false), vec![6, 3, 2, 1]);
        assert_eq!(facteurs(6, true), vec![6, -6, 3, -3, 2, -2, 1, -1]);
        assert_eq!(facteurs(0, true), vec![0]);
        assert_eq!(facteurs(1, false), vec![1]);
    }

    #[test]
    fn racines_entieres() {
        // x^2-3x+2 = (x-1)(x-2) : racines 1 et 2
        let p = poly(&["2", "-3", "1"]);
        match chercher_racines(&p) {
            RacinesRationnelles::Trouvees(racines) => {
                assert!(racines.contains(&rat("1")));
                assert!(racines.contains(&rat("2")));
                assert_eq!(racines.len(), 2);
            }
            RacinesRationnelles::Aucune => panic!("racines attendues"),
        }
    }

    #[test]
    fn racines_fractionnaires() {
        // 2x^2-x-1 = (2x+1)(x-1) : racines -1/2 et 1
        let p = poly(&["-1", "-1", "2"]);
        match chercher_racines(&p) {
            RacinesRationnelles::Trouvees(racines) => {
                assert!(racines.contains(&rat("-1/2")));
                assert!(racines.contains(&rat("1")));
            }
            RacinesRationnelles::Aucune => panic!("racines attendues"),
        }
    }

    #[test]
    fn denominateurs_chasses() {
        // x^2/2 - 1/2 : racines 1 et -1
        let p = poly(&["-1/2", "0", "1/2"]);
        match chercher_racines(&p) {
            RacinesRationnelles::Trouvees(racines) => {
                assert!(racines.contains(&rat("1")));
                assert!(racines.contains(&rat("-1")));
            }
            RacinesRationnelles::Aucune => panic!("racines attendues"),
        }
    }

    #[test]
    fn zero_inscrit_d_office() {
        // x^2+x = x(x+1) : racines 0 et -1, 0 en tête
        let p = poly(&["0", "1", "1"]);
        match chercher_racines(&p) {
            RacinesRationnelles::Trouvees(racines) => {
                assert_eq!(racines[0], Rationnel::zero());
                assert!(racines.contains(&rat("-1")));
            }
            RacinesRationnelles::Aucune => panic!("racines attendues"),
        }
    }

    #[test]
    fn aucune_racine() {
        // x^2+1 : pas de racine rationnelle
        let p = poly(&["1", "0", "1"]);
        assert_eq!(chercher_racines(&p), RacinesRationnelles::Aucune);
        assert_eq!(
            chercher_racines(&p).to_string(),
            "aucune racine rationnelle"
        );
    }

    #[test]
    fn degre_zero() {
        assert_eq!(
            chercher_racines(&Polynome::zero()),
            RacinesRationnelles::Trouvees(vec![Rationnel::zero()])
        );
        assert_eq!(
            chercher_racines(&poly(&["5"])),
            RacinesRationnelles::Aucune
        );
    }

    #[test]
    fn chaque_racine_annule_le_polynome() {
        let p = poly(&["6", "-5", "-2", "1"]); // (x-1)(x+2)(x-3) = x^3-2x^2-5x+6
        if let RacinesRationnelles::Trouvees(racines) = chercher_racines(&p) {
            assert!(!racines.is_empty());
            for racine in racines {
                let valeur = p.evaluer(&Complexe::reel(racine)).unwrap();
                assert!(valeur.est_nul(), "évaluation non nulle");
            }
        } else {
            panic!("racines attendues");
        }
    }
}
