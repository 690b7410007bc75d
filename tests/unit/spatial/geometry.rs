//! Tests for tile positions, edge clamping and bounding box merging

#[cfg(test)]
mod tests {
    use covergrid::io::error::ErrorKind;
    use covergrid::spatial::geometry::{BoundingBox, GridGeometry, TileAddress};

    // Tests the bottom-right quadrant of a 2x2 grid reaches the clamped edge
    // Verified by removing the last row clamp
    #[test]
    fn test_tile_position_bottom_right_quadrant() {
        let geometry = GridGeometry::new(2, 500);

        assert_eq!(geometry.tile_size(), 250);
        assert_eq!(
            geometry.tile_position(3),
            Some(BoundingBox {
                min: [250, 250],
                max: [499, 499],
            })
        );
    }

    // Tests tiles outside the grid have no position
    // Verified by comparing against dimension instead of tile count
    #[test]
    fn test_tile_position_out_of_range() {
        let geometry = GridGeometry::new(3, 300);

        assert!(geometry.tile_position(8).is_some());
        assert!(geometry.tile_position(9).is_none());
        assert!(geometry.tile_position(u32::MAX).is_none());
    }

    // Tests adjacent tiles share edges and the last row and column end at image_size - 1
    // Verified by computing x2 from the tile size for the last column
    #[test]
    fn test_tile_positions_cover_whole_image() {
        for dimension in 2..=5 {
            for image_size in [128, 333, 500, 1000, 1024] {
                let geometry = GridGeometry::new(dimension, image_size);

                for tile in 0..geometry.tile_count() {
                    let rect = geometry.tile_position(tile).unwrap();
                    let (row, col) = geometry.tile_coordinates(tile).unwrap();

                    if col == 0 {
                        assert_eq!(rect.min[0], 0);
                    } else {
                        let left = geometry.tile_position(tile - 1).unwrap();
                        assert_eq!(left.max[0], rect.min[0], "gap left of tile {tile}");
                    }

                    if row == 0 {
                        assert_eq!(rect.min[1], 0);
                    } else {
                        let above = geometry.tile_position(tile - dimension).unwrap();
                        assert_eq!(above.max[1], rect.min[1], "gap above tile {tile}");
                    }

                    if col == dimension - 1 {
                        assert_eq!(rect.max[0], image_size - 1);
                    }
                    if row == dimension - 1 {
                        assert_eq!(rect.max[1], image_size - 1);
                    }
                }
            }
        }
    }

    // Tests truncated tile sizes are absorbed by the last column
    // Verified by using ceiling division for the tile size
    #[test]
    fn test_tile_position_absorbs_rounding() {
        let geometry = GridGeometry::new(3, 500);

        assert_eq!(geometry.tile_size(), 166);
        let last = geometry.tile_position(8).unwrap();
        assert_eq!(last.min, [332, 332]);
        assert_eq!(last.max, [499, 499]);
        assert_eq!(last.width(), 167);
    }

    // Tests single-tile addresses match tile positions
    // Verified by dropping the first tile from the running bounds
    #[test]
    fn test_bounding_box_single_tile_matches_position() {
        let geometry = GridGeometry::new(4, 512);

        for tile in 0..geometry.tile_count() {
            let bounds = geometry.bounding_box(&tile.to_string()).unwrap();
            assert_eq!(Some(bounds), geometry.tile_position(tile));
        }
    }

    // Tests merged addresses span from the first tile's corner to the last tile's corner
    // Verified by tracking only the minimum corner
    #[test]
    fn test_bounding_box_merges_tiles() {
        let geometry = GridGeometry::new(3, 300);

        let bounds = geometry.bounding_box("0,1,3,4").unwrap();
        assert_eq!(bounds.min, [0, 0]);
        assert_eq!(bounds.max, [200, 200]);

        let bounds = geometry.bounding_box("4,5,7,8").unwrap();
        assert_eq!(bounds.min, [100, 100]);
        assert_eq!(bounds.max, [299, 299]);
    }

    // Tests member order does not change the merged bounds
    // Verified by seeding the bounds from the last tile only
    #[test]
    fn test_bounding_box_order_independent() {
        let geometry = GridGeometry::new(5, 1000);

        let forward = geometry.bounding_box("15,16,20,21").unwrap();
        let reversed = geometry.bounding_box("21, 20 ,16,15").unwrap();
        assert_eq!(forward, reversed);
        assert_eq!(forward.min, [0, 600]);
        assert_eq!(forward.max, [400, 999]);
    }

    // Tests the merged box equals the smallest box containing every member rectangle
    // Verified by skipping the max corner of each member
    #[test]
    fn test_bounding_box_is_minimal_cover() {
        let geometry = GridGeometry::new(4, 1000);
        let tiles = [0, 1, 2, 4, 5, 6, 8, 9, 10];
        let address = tiles.map(|t| t.to_string()).join(",");

        let bounds = geometry.bounding_box(&address).unwrap();
        let rects: Vec<BoundingBox> = tiles
            .iter()
            .map(|&t| geometry.tile_position(t).unwrap())
            .collect();

        assert_eq!(bounds.min[0], rects.iter().map(|r| r.min[0]).min().unwrap());
        assert_eq!(bounds.min[1], rects.iter().map(|r| r.min[1]).min().unwrap());
        assert_eq!(bounds.max[0], rects.iter().map(|r| r.max[0]).max().unwrap());
        assert_eq!(bounds.max[1], rects.iter().map(|r| r.max[1]).max().unwrap());
        assert!(rects.iter().all(|r| bounds.contains(r.min) && bounds.contains(r.max)));
    }

    // Tests malformed and out-of-range addresses are rejected
    // Verified by skipping the range check on member tiles
    #[test]
    fn test_bounding_box_invalid_addresses() {
        let geometry = GridGeometry::new(2, 500);

        for address in ["", "4", "0,4", "a", "1,,2", "-1", "0;1", "1.5"] {
            let err = geometry.bounding_box(address).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidAddress, "address {address:?}");
            assert!(err.to_string().contains(address));
        }
    }

    // Tests addresses print back in comma separated form
    // Verified by joining with ", "
    #[test]
    fn test_tile_address_display() {
        let address: TileAddress = " 5, 6 ,9,10 ".parse().unwrap();

        assert_eq!(address.tiles(), &[5, 6, 9, 10]);
        assert_eq!(address.to_string(), "5,6,9,10");
        assert!(TileAddress::new(Vec::new()).is_err());
    }
}
