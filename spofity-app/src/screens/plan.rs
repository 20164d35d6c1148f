//! Subscription plan picker.

use spofity_lib::catalog::{Plan, PlanDetails};

use crate::settings::{SettingKey, SettingsError, SettingsProvider};

/// Result of asking for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChange {
    Unchanged,
    Changed { from: Plan, to: Plan },
}

#[derive(Debug, Default)]
pub struct PlanScreen {
    current: Plan,
}

impl PlanScreen {
    pub fn new(current: Plan) -> Self {
        Self { current }
    }

    /// Reads the stored plan; free if none.
    pub async fn load(settings: &SettingsProvider) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.get_or(SettingKey::AccountPlan, Plan::Free).await?))
    }

    pub fn current(&self) -> Plan {
        self.current
    }

    /// Every plan with its presentation, current one flagged.
    pub fn options(&self) -> Vec<(&'static PlanDetails, bool)> {
        Plan::ALL
            .iter()
            .map(|&plan| (plan.details(), plan == self.current))
            .collect()
    }

    /// Switches plan. Choosing the current plan does nothing.
    pub fn choose(&mut self, plan: Plan) -> PlanChange {
        if plan == self.current {
            return PlanChange::Unchanged;
        }
        let change = PlanChange::Changed {
            from: self.current,
            to: plan,
        };
        log::info!("plan {:?} -> {:?}", self.current, plan);
        self.current = plan;
        change
    }

    /// [`choose`](Self::choose), then persist if anything changed.
    pub async fn choose_and_save(
        &mut self,
        plan: Plan,
        settings: &SettingsProvider,
    ) -> Result<PlanChange, SettingsError> {
        let change = self.choose(plan);
        if change != PlanChange::Unchanged {
            settings.set(SettingKey::AccountPlan, &self.current).await?;
        }
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_plan_is_noop() {
        let mut screen = PlanScreen::default();
        assert_eq!(screen.choose(Plan::Free), PlanChange::Unchanged);
        assert_eq!(
            screen.choose(Plan::Premium),
            PlanChange::Changed {
                from: Plan::Free,
                to: Plan::Premium
            }
        );
        assert_eq!(screen.choose(Plan::Premium), PlanChange::Unchanged);
    }

    #[test]
    fn test_options_flag_current() {
        let screen = PlanScreen::new(Plan::Premium);
        let flagged: Vec<&str> = screen
            .options()
            .into_iter()
            .filter(|(_, current)| *current)
            .map(|(details, _)| details.name)
            .collect();
        assert_eq!(flagged, vec!["Premium"]);
    }

    #[tokio::test]
    async fn test_choice_persists() {
        let settings = SettingsProvider::in_memory();
        let mut screen = PlanScreen::load(&settings).await.unwrap();
        assert_eq!(screen.current(), Plan::Free);

        screen.choose_and_save(Plan::Premium, &settings).await.unwrap();
        let reloaded = PlanScreen::load(&settings).await.unwrap();
        assert_eq!(reloaded.current(), Plan::Premium);
    }
}
