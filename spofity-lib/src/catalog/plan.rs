use serde::Deserialize;
use serde::Serialize;

/// Subscription tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    #[default]
    Free,
    Premium,
}

/// How a plan is presented on the plan screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDetails {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub badge: Option<&'static str>,
}

const FREE: PlanDetails = PlanDetails {
    name: "Gratis",
    price: "$0/mes",
    description: "Plan básico con limitaciones",
    features: &[
        "Acceso a catálogo completo",
        "Anuncios publicitarios",
        "Calidad estándar (96 kbps)",
        "Saltar canciones limitado",
        "Sin descargas",
    ],
    badge: None,
};

const PREMIUM: PlanDetails = PlanDetails {
    name: "Premium",
    price: "$9.99/mes",
    description: "Experiencia sin límites",
    features: &[
        "Sin anuncios",
        "Calidad premium (320 kbps)",
        "Saltar canciones ilimitadas",
        "Descargas offline",
        "Reproducción en cualquier dispositivo",
        "Letra sincronizada",
    ],
    badge: Some("MÁS POPULAR"),
};

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Free, Plan::Premium];

    pub fn details(self) -> &'static PlanDetails {
        match self {
            Plan::Free => &FREE,
            Plan::Premium => &PREMIUM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(Plan::Free.details().features.len(), 5);
        assert_eq!(Plan::Premium.details().features.len(), 6);
        assert_eq!(Plan::Premium.details().badge, Some("MÁS POPULAR"));
        assert_eq!(Plan::Free.details().price, "$0/mes");
        assert_eq!(Plan::default(), Plan::Free);
    }
}
