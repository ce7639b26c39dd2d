//! Warp a player to another player's warp sign.

use std::sync::Arc;

use warpsigns_domain::{
    message_keys, ArrivalPose, BlockFace, Environment, Message, OwnerId, SignState, WarpPoint,
    WorldId,
};

use crate::entities::WarpDirectory;
use crate::infrastructure::ports::{
    GameWorldPort, PresencePort, SafetyPort, SignPort, Sound, TeleportCause, TeleportPort,
};

/// Whether the arrival was announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalFeedback {
    /// The owner is online and cannot see the requester.
    Suppressed,
    Announced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WarpOutcome {
    /// No warp mapped for the owner; the entry was cleared.
    DoesNotExist,
    /// The sign at the warp point is gone; the entry was removed.
    SignDestroyed,
    /// Requester is falling in a world that forbids it.
    FallingBlocked,
    /// No safe block in front of the sign. The warp is kept.
    NotSafe,
    Teleported {
        pose: ArrivalPose,
        pvp: bool,
        feedback: ArrivalFeedback,
    },
}

/// Warp player use case.
///
/// Everything up to the teleport request is decided synchronously against
/// the host; the move itself is fire-and-forget.
pub struct WarpPlayer {
    directory: Arc<WarpDirectory>,
    signs: Arc<dyn SignPort>,
    safety: Arc<dyn SafetyPort>,
    teleport: Arc<dyn TeleportPort>,
    worlds: Arc<dyn GameWorldPort>,
    presence: Arc<dyn PresencePort>,
}

impl WarpPlayer {
    pub fn new(
        directory: Arc<WarpDirectory>,
        signs: Arc<dyn SignPort>,
        safety: Arc<dyn SafetyPort>,
        teleport: Arc<dyn TeleportPort>,
        worlds: Arc<dyn GameWorldPort>,
        presence: Arc<dyn PresencePort>,
    ) -> Self {
        Self {
            directory,
            signs,
            safety,
            teleport,
            worlds,
            presence,
        }
    }

    /// Warp `requester` to the warp of `owner` in `world`.
    pub async fn execute(&self, world: WorldId, requester: OwnerId, owner: OwnerId) -> WarpOutcome {
        let Some(point) = self.directory.get(world, owner) else {
            self.tell(requester, message_keys::DOES_NOT_EXIST);
            self.directory.remove_owner(world, owner).await;
            return WarpOutcome::DoesNotExist;
        };

        if self.is_falling_blocked(requester) {
            self.tell(requester, message_keys::FALLING_HINT);
            return WarpOutcome::FallingBlocked;
        }

        let pvp = self.pvp_at(point, owner);

        let arrival = match self.signs.read_sign(point) {
            SignState::Wall { facing, .. } => {
                let front = point.relative(facing);
                self.first_safe(&[front, front.down()])
                    .map(|block| (block, facing))
            }
            SignState::Standing { rotation, .. } => self
                .first_safe(&[point.relative(rotation)])
                .map(|block| (block, rotation)),
            SignState::NotASign => {
                tracing::info!(
                    world_id = %world,
                    owner_id = %owner,
                    point = %point,
                    "Warp sign destroyed, removing warp"
                );
                self.tell(requester, message_keys::DOES_NOT_EXIST);
                self.directory.remove_at(point).await;
                return WarpOutcome::SignDestroyed;
            }
        };

        let Some((block, facing)) = arrival else {
            self.tell(requester, message_keys::NOT_SAFE);
            return WarpOutcome::NotSafe;
        };

        self.arrive(requester, owner, block, facing, pvp)
    }

    fn arrive(
        &self,
        requester: OwnerId,
        owner: OwnerId,
        block: WarpPoint,
        facing: BlockFace,
        pvp: bool,
    ) -> WarpOutcome {
        let pose = ArrivalPose::facing(block, facing);
        self.teleport.teleport(requester, pose, TeleportCause::Command);
        tracing::debug!(requester = %requester, owner_id = %owner, block = %block, "Warped player");

        // Hidden requesters stay hidden.
        if self.presence.is_online(owner) && !self.presence.can_see(owner, requester) {
            return WarpOutcome::Teleported {
                pose,
                pvp,
                feedback: ArrivalFeedback::Suppressed,
            };
        }

        if pvp {
            self.tell(requester, message_keys::PVP_ENABLED);
            self.presence.play_sound(requester, Sound::ArrowHit);
        } else {
            self.presence.play_sound(requester, Sound::BatTakeoff);
        }
        if requester != owner && self.presence.is_online(owner) {
            let name = self.presence.display_name(requester);
            self.presence.send_message(
                owner,
                Message::new(message_keys::PLAYER_WARPED).with(message_keys::NAME_PLACEHOLDER, name),
            );
        }

        WarpOutcome::Teleported {
            pose,
            pvp,
            feedback: ArrivalFeedback::Announced,
        }
    }

    fn is_falling_blocked(&self, requester: OwnerId) -> bool {
        self.presence.current_world(requester).is_some_and(|current| {
            self.worlds.is_game_world(current)
                && self.worlds.prevents_falling_teleport(current)
                && self.presence.fall_distance(requester) > 0.0
        })
    }

    /// PvP flag of the owner's island for the environment of the warp.
    fn pvp_at(&self, point: WarpPoint, owner: OwnerId) -> bool {
        match self.worlds.environment(point.world_id) {
            Environment::Custom => false,
            environment => self
                .worlds
                .island_pvp(point.world_id, owner, environment)
                .unwrap_or(false),
        }
    }

    fn first_safe(&self, candidates: &[WarpPoint]) -> Option<WarpPoint> {
        candidates
            .iter()
            .copied()
            .find(|candidate| self.safety.is_safe(*candidate))
    }

    fn tell(&self, player: OwnerId, key: &str) {
        self.presence.send_message(player, Message::new(key));
    }
}
