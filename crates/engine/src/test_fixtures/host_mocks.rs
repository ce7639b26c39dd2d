//! In-memory host for testing.
//!
//! Implements every host port over one shared [`HostState`]. Tests seed the
//! world through the helpers or `with`, then assert on the recorded calls.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use warpsigns_domain::{
    ArrivalPose, BlockFace, Environment, MaterialId, Message, OwnerId, SignReading, SignState,
    WarpPoint, WorldId,
};

use crate::app::HostPorts;
use crate::infrastructure::ports::{
    GameWorldPort, HostError, PanelPort, PermissionPort, PresencePort, RecencyPort, SafetyPort,
    SignPort, SignTone, Sound, TeleportCause, TeleportPort, WarpCreated, WarpEventPort,
};
use crate::use_cases::panel::Page;

#[derive(Default)]
pub struct HostState {
    // World
    pub signs: HashMap<WarpPoint, SignState>,
    pub unloaded_chunks: HashSet<(WorldId, (i32, i32))>,
    pub safe: HashSet<WarpPoint>,
    pub environments: HashMap<WorldId, Environment>,
    pub game_worlds: HashSet<WorldId>,
    pub fall_protected: HashSet<WorldId>,
    pub island_pvp: HashMap<(WorldId, OwnerId, Environment), bool>,
    pub permission_prefixes: HashMap<WorldId, String>,
    /// Material names the host does not know.
    pub unknown_materials: HashSet<String>,
    pub paint_fails: bool,

    // Players
    pub last_active: HashMap<OwnerId, i64>,
    pub online: HashSet<OwnerId>,
    /// `(viewer, target)` pairs where the viewer cannot see the target.
    pub hidden_from: HashSet<(OwnerId, OwnerId)>,
    pub names: HashMap<OwnerId, String>,
    pub player_worlds: HashMap<OwnerId, WorldId>,
    pub falling: HashMap<OwnerId, f32>,
    pub permissions: HashMap<OwnerId, Vec<String>>,

    // Recorded calls
    pub sign_reads: usize,
    pub painted: Vec<(WarpPoint, SignTone)>,
    pub messages: Vec<(OwnerId, Message)>,
    pub sounds: Vec<(OwnerId, Sound)>,
    pub teleports: Vec<(OwnerId, ArrivalPose, TeleportCause)>,
    pub created: Vec<WarpCreated>,
    pub opened: Vec<(OwnerId, Page)>,
    pub closed: Vec<OwnerId>,
}

impl HostState {
    /// Message keys sent to `player`, in order.
    pub fn messages_for(&self, player: OwnerId) -> Vec<String> {
        self.messages
            .iter()
            .filter(|(to, _)| *to == player)
            .map(|(_, message)| message.key.clone())
            .collect()
    }
}

#[derive(Default)]
pub struct FakeHost {
    state: Mutex<HostState>,
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut HostState) -> R) -> R {
        let mut state = self.state.lock().expect("fake host state poisoned");
        f(&mut state)
    }

    pub fn place_wall_sign(&self, point: WarpPoint, facing: BlockFace, lines: &[&str]) {
        let reading = reading(lines);
        self.with(|s| {
            s.signs.insert(point, SignState::Wall { facing, reading });
        });
    }

    pub fn place_standing_sign(&self, point: WarpPoint, rotation: BlockFace, lines: &[&str]) {
        let reading = reading(lines);
        self.with(|s| {
            s.signs.insert(point, SignState::Standing { rotation, reading });
        });
    }

    pub fn break_sign(&self, point: WarpPoint) {
        self.with(|s| {
            s.signs.remove(&point);
        });
    }

    pub fn mark_safe(&self, point: WarpPoint) {
        self.with(|s| {
            s.safe.insert(point);
        });
    }

    /// Every host port backed by this fake.
    pub fn ports(self: &Arc<Self>) -> HostPorts {
        HostPorts {
            signs: self.clone(),
            safety: self.clone(),
            teleport: self.clone(),
            worlds: self.clone(),
            recency: self.clone(),
            presence: self.clone(),
            permissions: self.clone(),
            panels: self.clone(),
            events: self.clone(),
        }
    }
}

fn reading(lines: &[&str]) -> SignReading {
    SignReading {
        lines: lines.iter().map(|line| line.to_string()).collect(),
        item_material: MaterialId::from_static("OAK_SIGN"),
    }
}

impl SignPort for FakeHost {
    fn read_sign(&self, point: WarpPoint) -> SignState {
        self.with(|s| {
            s.sign_reads += 1;
            s.signs.get(&point).cloned().unwrap_or(SignState::NotASign)
        })
    }

    fn is_chunk_loaded(&self, point: WarpPoint) -> bool {
        self.with(|s| !s.unloaded_chunks.contains(&(point.world_id, point.chunk())))
    }

    fn paint_sign(
        &self,
        point: WarpPoint,
        _welcome_line: &str,
        tone: SignTone,
    ) -> Result<(), HostError> {
        self.with(|s| {
            if s.paint_fails {
                return Err(HostError::Failed(format!("cannot paint {point}")));
            }
            s.painted.push((point, tone));
            Ok(())
        })
    }
}

impl SafetyPort for FakeHost {
    fn is_safe(&self, point: WarpPoint) -> bool {
        self.with(|s| s.safe.contains(&point))
    }
}

impl TeleportPort for FakeHost {
    fn teleport(&self, player: OwnerId, pose: ArrivalPose, cause: TeleportCause) {
        self.with(|s| s.teleports.push((player, pose, cause)));
    }
}

impl GameWorldPort for FakeHost {
    fn environment(&self, world: WorldId) -> Environment {
        self.with(|s| {
            s.environments
                .get(&world)
                .copied()
                .unwrap_or(Environment::Normal)
        })
    }

    fn is_game_world(&self, world: WorldId) -> bool {
        self.with(|s| s.game_worlds.contains(&world))
    }

    fn prevents_falling_teleport(&self, world: WorldId) -> bool {
        self.with(|s| s.fall_protected.contains(&world))
    }

    fn island_pvp(
        &self,
        world: WorldId,
        owner: OwnerId,
        environment: Environment,
    ) -> Option<bool> {
        self.with(|s| s.island_pvp.get(&(world, owner, environment)).copied())
    }

    fn permission_prefix(&self, world: WorldId) -> Option<String> {
        self.with(|s| s.permission_prefixes.get(&world).cloned())
    }

    fn is_item_material(&self, material: &MaterialId) -> bool {
        self.with(|s| !s.unknown_materials.contains(material.as_str()))
    }
}

impl RecencyPort for FakeHost {
    fn last_active(&self, player: OwnerId) -> i64 {
        self.with(|s| s.last_active.get(&player).copied().unwrap_or(0))
    }
}

impl PresencePort for FakeHost {
    fn is_online(&self, player: OwnerId) -> bool {
        self.with(|s| s.online.contains(&player))
    }

    fn can_see(&self, viewer: OwnerId, target: OwnerId) -> bool {
        self.with(|s| !s.hidden_from.contains(&(viewer, target)))
    }

    fn display_name(&self, player: OwnerId) -> String {
        self.with(|s| s.names.get(&player).cloned().unwrap_or_default())
    }

    fn current_world(&self, player: OwnerId) -> Option<WorldId> {
        self.with(|s| s.player_worlds.get(&player).copied())
    }

    fn fall_distance(&self, player: OwnerId) -> f32 {
        self.with(|s| s.falling.get(&player).copied().unwrap_or(0.0))
    }

    fn send_message(&self, player: OwnerId, message: Message) {
        self.with(|s| s.messages.push((player, message)));
    }

    fn play_sound(&self, player: OwnerId, sound: Sound) {
        self.with(|s| s.sounds.push((player, sound)));
    }

    fn translate(&self, _player: OwnerId, key: &str) -> String {
        key.to_string()
    }
}

impl PermissionPort for FakeHost {
    fn effective_permissions(&self, player: OwnerId) -> Option<Vec<String>> {
        self.with(|s| {
            s.online
                .contains(&player)
                .then(|| s.permissions.get(&player).cloned().unwrap_or_default())
        })
    }
}

impl PanelPort for FakeHost {
    fn open(&self, viewer: OwnerId, page: Page) {
        self.with(|s| s.opened.push((viewer, page)));
    }

    fn close(&self, viewer: OwnerId) {
        self.with(|s| s.closed.push(viewer));
    }
}

impl WarpEventPort for FakeHost {
    fn warp_created(&self, event: WarpCreated) {
        self.with(|s| s.created.push(event));
    }
}
