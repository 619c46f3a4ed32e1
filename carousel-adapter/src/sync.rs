use carousel::SyncPeer;

use crate::Controller;

/// Owns a set of controllers and delivers their mirror moves to each other.
///
/// Each controller is addressed by the [`SyncPeer`] returned from [`SyncGroup::push`]. A page
/// change on one member is applied to its linked peer only; the peer does not forward it, so
/// mutually linked carousels never loop.
#[derive(Debug)]
pub struct SyncGroup<H> {
    members: Vec<Controller<H>>,
}

impl<H> Default for SyncGroup<H> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<H> SyncGroup<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, controller: Controller<H>) -> SyncPeer {
        self.members.push(controller);
        SyncPeer(self.members.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, peer: SyncPeer) -> Option<&Controller<H>> {
        self.members.get(peer.0)
    }

    pub fn get_mut(&mut self, peer: SyncPeer) -> Option<&mut Controller<H>> {
        self.members.get_mut(peer.0)
    }

    /// Makes `to` mirror the page changes of `from`. Returns `false` if either is unknown.
    pub fn link(&mut self, from: SyncPeer, to: SyncPeer) -> bool {
        if from == to || to.0 >= self.members.len() {
            return false;
        }
        let Some(member) = self.members.get_mut(from.0) else {
            return false;
        };
        member.carousel_mut().set_sync_view(Some(to));
        true
    }

    pub fn unlink(&mut self, from: SyncPeer) {
        if let Some(member) = self.members.get_mut(from.0) {
            member.carousel_mut().set_sync_view(None);
        }
    }

    /// Delivers every pending mirror move. Returns how many were applied.
    pub fn dispatch(&mut self) -> usize {
        let mut delivered = 0;
        for i in 0..self.members.len() {
            let Some(m) = self.members[i].take_mirror_move() else {
                continue;
            };
            let Some(target) = self.members.get_mut(m.peer.0) else {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "carousel", peer = m.peer.0, "mirror move to unknown peer dropped");
                continue;
            };
            if target.apply_mirrored_move(m.display_index).is_some() {
                delivered += 1;
            }
        }
        delivered
    }

    /// Ticks every member, then delivers the mirror moves they produced.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        for member in &mut self.members {
            member.tick(now_ms);
        }
        self.dispatch()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SyncPeer, &Controller<H>)> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, c)| (SyncPeer(i), c))
    }
}
