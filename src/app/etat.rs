//! src/app/etat.rs
//!
//! État console (sans vue, sans calcul propre).
//!
//! Rôle : porter le polynôme courant et ses deux premières dérivées,
//! le symbole de variable, la précision de lecture et la dernière
//! erreur. Les dérivées sont recalculées à chaque nouveau polynôme.
//!
//! Contrats :
//! - aucune analyse ici (pas de parsing : la console appelle le noyau) ;
//! - bornes sur la précision (anti-abus).

use polynome_qpur::noyau::polynome::Polynome;

/// Précision de lecture décimale par défaut.
const CHIFFRES_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
const CHIFFRES_MAX: usize = 200;

#[derive(Clone, Debug)]
pub struct EtatCalc {
    // --- paramètres ---
    pub variable: String,
    pub chiffres: usize,

    // --- polynôme courant et dérivées ---
    pub polynome: Option<Polynome>,
    pub derivee: Option<Polynome>,
    pub derivee_seconde: Option<Polynome>,

    // --- dernière erreur (vide si la dernière action a réussi) ---
    pub erreur: String,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            chiffres: CHIFFRES_DEFAUT,
            polynome: None,
            derivee: None,
            derivee_seconde: None,
            erreur: String::new(),
        }
    }
}

impl EtatCalc {
    pub fn nouveau(variable: &str, chiffres: usize) -> Self {
        let mut etat = Self::default();
        etat.set_variable(variable);
        etat.set_chiffres(chiffres);
        etat
    }

    /// Dépose un nouveau polynôme et recalcule f' et f''.
    pub fn set_polynome(&mut self, polynome: Polynome) {
        let derivee = polynome.deriver();
        self.derivee_seconde = Some(derivee.deriver());
        self.derivee = Some(derivee);
        self.polynome = Some(polynome);
        self.erreur.clear();
    }

    /// Place une erreur. Le dernier polynôme est CONSERVÉ : une faute de
    /// frappe n'efface pas l'écran.
    pub fn set_erreur(&mut self, message: impl Into<String>) {
        self.erreur = message.into();
    }

    pub fn set_variable(&mut self, variable: &str) {
        self.variable = variable.to_string();
    }

    /// Garde-fou : borne la précision de lecture.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(0, CHIFFRES_MAX);
    }
}

/* ------------------------ Tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depot_recalcule_les_derivees() {
        let mut etat = EtatCalc::default();
        let p = Polynome::analyser("x^3", "x").unwrap();
        etat.set_polynome(p);

        assert_eq!(etat.polynome.as_ref().unwrap().to_string(), "x^3");
        assert_eq!(etat.derivee.as_ref().unwrap().to_string(), "3x^2");
        assert_eq!(etat.derivee_seconde.as_ref().unwrap().to_string(), "6x");
        assert!(etat.erreur.is_empty());
    }

    #[test]
    fn erreur_conserve_le_polynome() {
        let mut etat = EtatCalc::default();
        etat.set_polynome(Polynome::analyser("x+1", "x").unwrap());
        etat.set_erreur("faute");

        assert_eq!(etat.erreur, "faute");
        assert!(etat.polynome.is_some());
    }

    #[test]
    fn chiffres_bornes() {
        let mut etat = EtatCalc::default();
        etat.set_chiffres(10_000);
        assert_eq!(etat.chiffres, CHIFFRES_MAX);
        etat.set_chiffres(0);
        assert_eq!(etat.chiffres, 0);
    }
}
