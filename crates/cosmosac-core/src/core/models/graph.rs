use super::error::InputShapeError;

/// Immutable adjacency view over the atoms of one molecule.
///
/// Neighbor lists keep ascending atom-index order, which is the order the
/// typing rules rely on when they pick "the first" neighbor of an atom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BondGraph {
    neighbors: Vec<Vec<usize>>,
}

impl BondGraph {
    /// Builds the graph from a dense 0/1 adjacency matrix.
    ///
    /// The matrix must be `num_atoms` x `num_atoms`, symmetric, have a zero
    /// diagonal and contain only 0 or 1.
    pub fn from_matrix<R: AsRef<[u8]>>(
        matrix: &[R],
        num_atoms: usize,
    ) -> Result<Self, InputShapeError> {
        if matrix.len() != num_atoms {
            return Err(InputShapeError::BondMatrixSize {
                expected: num_atoms,
                found: matrix.len(),
            });
        }

        for (row_idx, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_atoms {
                return Err(InputShapeError::BondMatrixNotSquare {
                    row: row_idx,
                    expected: num_atoms,
                    found: row.len(),
                });
            }
        }

        let mut neighbors = vec![Vec::new(); num_atoms];
        for i in 0..num_atoms {
            let row = matrix[i].as_ref();
            for j in 0..num_atoms {
                let value = row[j];
                if value > 1 {
                    return Err(InputShapeError::BondMatrixEntry { i, j, value });
                }
                if value != matrix[j].as_ref()[i] {
                    return Err(InputShapeError::BondMatrixAsymmetric { i, j });
                }
                if value == 1 {
                    if i == j {
                        return Err(InputShapeError::SelfBond { index: i });
                    }
                    neighbors[i].push(j);
                }
            }
        }

        Ok(Self { neighbors })
    }

    /// Builds the graph from an undirected edge list. Duplicate edges are merged.
    pub fn from_edges(num_atoms: usize, edges: &[(usize, usize)]) -> Result<Self, InputShapeError> {
        let mut neighbors = vec![Vec::new(); num_atoms];
        for &(i, j) in edges {
            if i >= num_atoms || j >= num_atoms {
                return Err(InputShapeError::BondIndexOutOfRange {
                    i,
                    j,
                    len: num_atoms,
                });
            }
            if i == j {
                return Err(InputShapeError::SelfBond { index: i });
            }
            neighbors[i].push(j);
            neighbors[j].push(i);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        Ok(Self { neighbors })
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    #[inline]
    pub fn neighbors(&self, atom: usize) -> &[usize] {
        &self.neighbors[atom]
    }

    #[inline]
    pub fn degree(&self, atom: usize) -> usize {
        self.neighbors[atom].len()
    }

    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for (i, list) in self.neighbors.iter().enumerate() {
            for &j in list {
                matrix[i][j] = 1;
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_matrix() -> Vec<Vec<u8>> {
        vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]
    }

    #[test]
    fn from_matrix_builds_sorted_neighbor_lists() {
        let graph = BondGraph::from_matrix(&water_matrix(), 3).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.degree(2), 1);
    }

    #[test]
    fn from_matrix_rejects_atom_count_mismatch() {
        let result = BondGraph::from_matrix(&water_matrix(), 4);
        assert_eq!(
            result,
            Err(InputShapeError::BondMatrixSize {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn from_matrix_rejects_ragged_rows() {
        let matrix = vec![vec![0, 1], vec![1]];
        let result = BondGraph::from_matrix(&matrix, 2);
        assert!(matches!(
            result,
            Err(InputShapeError::BondMatrixNotSquare { row: 1, .. })
        ));
    }

    #[test]
    fn from_matrix_rejects_asymmetric_matrix() {
        let matrix = vec![vec![0, 1], vec![0, 0]];
        let result = BondGraph::from_matrix(&matrix, 2);
        assert_eq!(result, Err(InputShapeError::BondMatrixAsymmetric { i: 0, j: 1 }));
    }

    #[test]
    fn from_matrix_rejects_non_boolean_entries() {
        let matrix = vec![vec![0, 2], vec![2, 0]];
        let result = BondGraph::from_matrix(&matrix, 2);
        assert_eq!(
            result,
            Err(InputShapeError::BondMatrixEntry {
                i: 0,
                j: 1,
                value: 2
            })
        );
    }

    #[test]
    fn from_matrix_rejects_self_bonds() {
        let matrix = vec![vec![1, 0], vec![0, 0]];
        let result = BondGraph::from_matrix(&matrix, 2);
        assert_eq!(result, Err(InputShapeError::SelfBond { index: 0 }));
    }

    #[test]
    fn from_edges_matches_from_matrix() {
        let from_edges = BondGraph::from_edges(3, &[(1, 0), (0, 2), (0, 1)]).unwrap();
        let from_matrix = BondGraph::from_matrix(&water_matrix(), 3).unwrap();
        assert_eq!(from_edges, from_matrix);
        assert_eq!(from_edges.to_matrix(), water_matrix());
    }

    #[test]
    fn from_edges_rejects_out_of_range_indices() {
        let result = BondGraph::from_edges(2, &[(0, 5)]);
        assert!(matches!(
            result,
            Err(InputShapeError::BondIndexOutOfRange { j: 5, .. })
        ));
    }
}
