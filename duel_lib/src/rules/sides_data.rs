use crate::rules::Side;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One value per side of the duel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidesData<TData> {
    pub player: TData,
    pub enemy: TData,
}
impl<T> SidesData<T> {
    pub fn new(player: T, enemy: T) -> Self {
        Self { player, enemy }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SidesData<U> {
        SidesData {
            player: f(&self.player),
            enemy: f(&self.enemy),
        }
    }
}

impl<T> Index<Side> for SidesData<T> {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        match index {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }
}

impl<T> IndexMut<Side> for SidesData<T> {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        match index {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}
