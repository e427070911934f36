use glam::IVec3;

use crate::mesh::ChunkMesher;
use crate::world::block::BlockType;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::index::WorldIndex;

/// A single block edit, addressed in world block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCommand {
    pub kind: EditKind,
    pub position: IVec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Place(BlockType),
    Remove,
}

impl EditCommand {
    pub fn place(position: IVec3, block: BlockType) -> Self {
        Self {
            kind: EditKind::Place(block),
            position,
        }
    }

    pub fn remove(position: IVec3) -> Self {
        Self {
            kind: EditKind::Remove,
            position,
        }
    }
}

/// What an edit did. Edits outside the registered world, or that would not
/// change the grid, are quiet no-ops rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Unchanged,
    OutOfWorld,
}

/// Applies block edits to the world and rebuilds the affected meshes. Only
/// the edited chunk is re-meshed, plus any neighbor that shares the edited
/// boundary, so both sides of a seam stay consistent.
pub struct WorldEditor<'a> {
    index: &'a WorldIndex,
    mesher: &'a ChunkMesher,
}

impl<'a> WorldEditor<'a> {
    pub fn new(index: &'a WorldIndex, mesher: &'a ChunkMesher) -> Self {
        Self { index, mesher }
    }

    pub fn place_block(&self, position: IVec3, block: BlockType) -> EditOutcome {
        self.apply(EditCommand::place(position, block))
    }

    pub fn remove_block(&self, position: IVec3) -> EditOutcome {
        self.apply(EditCommand::remove(position))
    }

    pub fn apply(&self, command: EditCommand) -> EditOutcome {
        let block = match command.kind {
            EditKind::Place(block) => block,
            EditKind::Remove => BlockType::Air,
        };
        self.write_block(command.position, block)
    }

    /// Maps the world position onto its owning chunk with flooring division,
    /// so positions on the negative side of the origin land in the right
    /// chunk, then writes and re-meshes.
    fn write_block(&self, position: IVec3, block: BlockType) -> EditOutcome {
        let dims = self.index.dims();
        let width = dims.width as i32;
        if position.y < 0 || position.y >= dims.height as i32 {
            log::debug!("edit at {position} is outside the world's height range");
            return EditOutcome::OutOfWorld;
        }

        let owner = ChunkCoord::from_block_pos(position, width);
        let local = IVec3::new(
            position.x.rem_euclid(width),
            position.y,
            position.z.rem_euclid(width),
        );

        let Some(chunk) = self.index.chunk(owner) else {
            log::debug!("edit at {position} targets unloaded chunk {owner}");
            return EditOutcome::OutOfWorld;
        };

        {
            let mut guard = chunk.write();
            if guard.grid.get(local) == block {
                return EditOutcome::Unchanged;
            }
            guard.grid.set(local, block);
        }
        log::debug!("set block at {position} (chunk {owner}) to {block:?}");

        self.remesh(owner);
        for neighbor in boundary_neighbors(owner, local, width) {
            self.remesh(neighbor);
        }
        EditOutcome::Applied
    }

    /// Rebuilds one chunk's mesh. The mesh is built under a read lock (the
    /// lookup may take read locks on neighbors) and swapped in under a short
    /// write lock afterwards.
    fn remesh(&self, coord: ChunkCoord) {
        let Some(chunk) = self.index.chunk(coord) else {
            return;
        };
        let mesh = self.mesher.mesh(&chunk.read(), self.index);
        chunk.write().mesh = mesh;
    }
}

/// Chunks adjacent to `owner` whose meshes can see the edited cell: those
/// across any face the cell sits flush against.
fn boundary_neighbors(owner: ChunkCoord, local: IVec3, width: i32) -> Vec<ChunkCoord> {
    let mut neighbors = Vec::new();
    if local.x == 0 {
        neighbors.push(owner.offset(-1, 0));
    }
    if local.x == width - 1 {
        neighbors.push(owner.offset(1, 0));
    }
    if local.z == 0 {
        neighbors.push(owner.offset(0, -1));
    }
    if local.z == width - 1 {
        neighbors.push(owner.offset(0, 1));
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block_grid::{BlockGrid, GridDims};
    use crate::world::chunk::Chunk;
    use crate::world::index::BlockLookup;

    fn test_world(chunks: &[(i32, i32)]) -> WorldIndex {
        let dims = GridDims::new(4, 8);
        let mut index = WorldIndex::new(dims);
        for &(x, z) in chunks {
            let coord = ChunkCoord::new(x, z);
            index
                .register(Chunk::new(coord, BlockGrid::new(dims)))
                .unwrap();
        }
        index
    }

    fn mesher() -> ChunkMesher {
        ChunkMesher::new(1.0)
    }

    fn face_count(index: &WorldIndex, coord: ChunkCoord) -> usize {
        index.chunk(coord).unwrap().read().mesh.face_count()
    }

    #[test]
    fn test_place_updates_grid_and_mesh() {
        let index = test_world(&[(0, 0)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);
        let outcome = editor.place_block(IVec3::new(1, 2, 1), BlockType::Stone);
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(
            index.block_at(ChunkCoord::new(0, 0), IVec3::new(1, 2, 1)),
            BlockType::Stone
        );
        assert_eq!(face_count(&index, ChunkCoord::new(0, 0)), 6);
    }

    #[test]
    fn test_place_then_remove_restores_the_mesh() {
        let index = test_world(&[(0, 0)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);
        editor.place_block(IVec3::new(2, 3, 2), BlockType::Dirt);
        let before = index.chunk(ChunkCoord::new(0, 0)).unwrap().read().mesh.clone();

        editor.place_block(IVec3::new(2, 4, 2), BlockType::Stone);
        assert_ne!(
            index.chunk(ChunkCoord::new(0, 0)).unwrap().read().mesh,
            before
        );

        editor.remove_block(IVec3::new(2, 4, 2));
        assert_eq!(
            index.chunk(ChunkCoord::new(0, 0)).unwrap().read().mesh,
            before
        );
    }

    #[test]
    fn test_edit_outside_the_world_is_a_noop() {
        let index = test_world(&[(0, 0)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);
        assert_eq!(
            editor.place_block(IVec3::new(0, -1, 0), BlockType::Stone),
            EditOutcome::OutOfWorld
        );
        assert_eq!(
            editor.place_block(IVec3::new(0, 8, 0), BlockType::Stone),
            EditOutcome::OutOfWorld
        );
        // Chunk (5, 5) was never registered.
        assert_eq!(
            editor.place_block(IVec3::new(20, 0, 20), BlockType::Stone),
            EditOutcome::OutOfWorld
        );
    }

    #[test]
    fn test_writing_the_same_block_is_unchanged() {
        let index = test_world(&[(0, 0)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);
        assert_eq!(
            editor.remove_block(IVec3::new(1, 1, 1)),
            EditOutcome::Unchanged
        );
        editor.place_block(IVec3::new(1, 1, 1), BlockType::Wood);
        assert_eq!(
            editor.place_block(IVec3::new(1, 1, 1), BlockType::Wood),
            EditOutcome::Unchanged
        );
    }

    #[test]
    fn test_negative_positions_land_in_the_right_chunk() {
        let index = test_world(&[(-1, -1)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);
        let outcome = editor.place_block(IVec3::new(-1, 0, -4), BlockType::Stone);
        assert_eq!(outcome, EditOutcome::Applied);
        // World x = -1 is the last column of chunk -1; world z = -4 its first.
        assert_eq!(
            index.block_at(ChunkCoord::new(-1, -1), IVec3::new(3, 0, 0)),
            BlockType::Stone
        );
    }

    #[test]
    fn test_boundary_edit_remeshes_the_neighbor() {
        let index = test_world(&[(0, 0), (1, 0)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);

        // A block at the +X edge of chunk (0, 0) shows all six faces while
        // its neighbor cell is empty.
        editor.place_block(IVec3::new(3, 2, 1), BlockType::Stone);
        assert_eq!(face_count(&index, ChunkCoord::new(0, 0)), 6);

        // Placing the adjacent block in chunk (1, 0) must update BOTH
        // meshes: the shared faces disappear from each side.
        editor.place_block(IVec3::new(4, 2, 1), BlockType::Stone);
        assert_eq!(face_count(&index, ChunkCoord::new(0, 0)), 5);
        assert_eq!(face_count(&index, ChunkCoord::new(1, 0)), 5);

        // Removing it again restores the hidden face across the seam.
        editor.remove_block(IVec3::new(4, 2, 1));
        assert_eq!(face_count(&index, ChunkCoord::new(0, 0)), 6);
        assert_eq!(face_count(&index, ChunkCoord::new(1, 0)), 0);
    }

    #[test]
    fn test_interior_edit_leaves_neighbor_mesh_alone() {
        let index = test_world(&[(0, 0), (1, 0)]);
        let mesher = mesher();
        let editor = WorldEditor::new(&index, &mesher);
        editor.place_block(IVec3::new(5, 1, 1), BlockType::Dirt);
        let neighbor_before = index.chunk(ChunkCoord::new(0, 0)).unwrap().read().mesh.clone();
        editor.place_block(IVec3::new(5, 3, 1), BlockType::Dirt);
        assert_eq!(
            index.chunk(ChunkCoord::new(0, 0)).unwrap().read().mesh,
            neighbor_before
        );
    }
}
