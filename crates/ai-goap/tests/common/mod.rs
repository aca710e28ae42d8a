#![allow(dead_code)]

use ai_goap::{Condition, NpcOperator, PlannerHelper, WorldState};

pub fn set_flag(name: &'static str, value: bool) -> impl Fn(&mut WorldState) -> bool {
    move |state| state.set_value(name, value).is_ok()
}

pub fn flag(state: &WorldState, name: &str) -> bool {
    state.value::<bool>(name).copied().unwrap_or(false)
}

/// Locked room: pick up the key and unlock (cheap) or bash the door (expensive).
pub struct DoorDomain {
    pub pick_up_key: NpcOperator,
    pub unlock_door: NpcOperator,
    pub bash_door: NpcOperator,
    pub enter_room: NpcOperator,
}

impl DoorDomain {
    pub fn new() -> Self {
        let pick_up_key = NpcOperator::new("PickUpKey", 1.0, set_flag("hasKey", true))
            .expect("valid cost")
            .with_precondition(Condition::equals("no key", "hasKey", false));
        let unlock_door = NpcOperator::new("UnlockDoor", 1.0, set_flag("doorLocked", false))
            .expect("valid cost")
            .with_precondition(Condition::equals("has key", "hasKey", true))
            .with_precondition(Condition::equals("door locked", "doorLocked", true));
        let bash_door = NpcOperator::new("BashDoor", 5.0, set_flag("doorLocked", false))
            .expect("valid cost")
            .with_precondition(Condition::equals("door locked", "doorLocked", true));
        let enter_room = NpcOperator::new("EnterRoom", 1.0, set_flag("inRoom", true))
            .expect("valid cost")
            .with_precondition(Condition::equals("door open", "doorLocked", false))
            .with_interrupt(Condition::equals("alarm", "alarm", true));

        Self {
            pick_up_key,
            unlock_door,
            bash_door,
            enter_room,
        }
    }

    pub fn start_state() -> WorldState {
        WorldState::new()
            .with_state("hasKey", false)
            .and_then(|s| s.with_state("doorLocked", true))
            .and_then(|s| s.with_state("inRoom", false))
            .and_then(|s| s.with_state("alarm", false))
            .expect("unique names")
    }

    pub fn helper(&self) -> PlannerHelper<'_> {
        let mut helper = PlannerHelper::new(
            |state| if flag(state, "inRoom") { 0.0 } else { 1.0 },
            |state| flag(state, "inRoom"),
        );
        helper.add_operator(&self.pick_up_key).expect("unique");
        helper.add_operator(&self.unlock_door).expect("unique");
        helper.add_operator(&self.bash_door).expect("unique");
        helper.add_operator(&self.enter_room).expect("unique");
        helper.set_current_state(&Self::start_state());
        helper
    }
}

pub fn names(plan: &[&dyn ai_goap::Operator]) -> Vec<String> {
    plan.iter().map(|op| op.name().to_string()).collect()
}
