//! Workout plan catalog
//!
//! Two fixed weekly schedules selected by key. The texts are static data and
//! are shown to the user exactly as written here.

use std::fmt;
use std::str::FromStr;

const MASS_GAIN_PLAN: &str = "Treino para Ganho de Massa Muscular:

Segunda - Feira:
Peito e Tríceps: 15x3 Supino, 10x3 Supino Inclinado com Halteres, 10x3 Crucifixo, 10x3 Tríceps Corda na Polia, 10x3 Tríceps Testa na Barra W, 10x3 Tríceps Francês na Polia.

Terça - Feira:
Costas e Bíceps: 10x3 Pulley Frente, 10x3 Remada Unilateral na Máquina, 10x3 Remada Cavalinho, 10x3 Rosca Barra W, 10x3 Rosca Martelo com Halteres.

Quarta - Feira:
Ombro: 10x4 Elevação Lateral com Halteres, 10x5 Desenvolvimento com Halteres, 10x3 Elevação Frontal com Halteres.

Quinta - Feira:
Perna: 10x3 Agachamento Livre, 10x3 Leg Press, 10x3 Cadeira Flexora, 10x3 Cadeira Extensora, 10x3 Mesa Flexora.

Sexta - Feira:
Cardio.";

const FAT_LOSS_PLAN: &str = "Treino para Perda de Gordura:

Segunda - Feira:
2 minutos de caminhada, seguido por 2 minutos de corrida (repetir 10 vezes).

Terça - Feira:
Perna: 10x2 Agachamento Livre, 10x2 Leg Press, 10x2 Cadeira Extensora. Simulador de Escada por 30 minutos.

Quarta - Feira:
Superiores: 10x2 Supino, 10x2 Remada Unilateral, 10x2 Rosca com Barra W, 10x2 Desenvolvimento com Halteres, 10x2 Tríceps na Polia. Simulador de Escada por 30 minutos.

Quinta - Feira:
Simulador de Escada por 45 minutos.";

/// Selectable workout plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutPlan {
    MassGain,
    FatLoss,
}

impl WorkoutPlan {
    pub const ALL: [WorkoutPlan; 2] = [Self::MassGain, Self::FatLoss];

    /// Selection key used by the plan selector
    pub fn key(&self) -> &'static str {
        match self {
            Self::MassGain => "mass_gain",
            Self::FatLoss => "fat_loss",
        }
    }

    /// Option label on the selector
    pub fn title(&self) -> &'static str {
        match self {
            Self::MassGain => "Ganho de Massa",
            Self::FatLoss => "Perda de Gordura",
        }
    }

    /// Full weekly schedule
    pub fn text(&self) -> &'static str {
        match self {
            Self::MassGain => MASS_GAIN_PLAN,
            Self::FatLoss => FAT_LOSS_PLAN,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plan| plan.key() == key)
    }
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for WorkoutPlan {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or(())
    }
}

/// Look up a plan by key; unknown keys (and the empty selection) yield `""`
pub fn catalog(key: &str) -> &'static str {
    WorkoutPlan::from_key(key).map_or("", |plan| plan.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        let mass = catalog("mass_gain");
        let fat = catalog("fat_loss");
        assert!(mass.starts_with("Treino para Ganho de Massa Muscular:"));
        assert!(fat.starts_with("Treino para Perda de Gordura:"));
        assert_ne!(mass, fat);
        assert_eq!(catalog("mass_gain"), mass);
    }

    #[test]
    fn test_unknown_keys_are_empty() {
        assert_eq!(catalog(""), "");
        assert_eq!(catalog("anything_else"), "");
        assert_eq!(catalog("MASS_GAIN"), "");
    }

    #[test]
    fn test_key_round_trip() {
        for plan in WorkoutPlan::ALL {
            assert_eq!(WorkoutPlan::from_key(plan.key()), Some(plan));
            assert_eq!(plan.key().parse::<WorkoutPlan>(), Ok(plan));
        }
    }

    #[test]
    fn test_schedule_shape() {
        assert_eq!(catalog("mass_gain").matches("- Feira:").count(), 5);
        assert_eq!(catalog("fat_loss").matches("- Feira:").count(), 4);
        assert!(catalog("mass_gain").ends_with("Cardio."));
        assert!(!catalog("fat_loss").contains("            "));
    }
}
