//! Marshaling between plain Rust vectors and `vector_service` messages
//!
//! Every request the client sends is built here. The functions preserve input
//! order exactly and perform no validation: mismatched `vectors`/`ids` lengths
//! and unusual `knbn`/`ef` values are left for the server to judge.

use rpc::vector_service::{FloatArray, InsertRequest, SearchRequest};

/// Wrap one vector into its protocol record
pub fn float_array<V>(values: V) -> FloatArray
where
    V: IntoIterator<Item = f32>,
{
    FloatArray {
        values: values.into_iter().collect(),
    }
}

/// Wrap a batch of vectors, keeping their order
pub fn float_arrays<V>(vectors: V) -> Vec<FloatArray>
where
    V: IntoIterator,
    V::Item: IntoIterator<Item = f32>,
{
    vectors.into_iter().map(float_array).collect()
}

/// Build an `InsertRequest`; `ids[i]` labels `vectors[i]`
pub fn insert_request<V, I>(vectors: V, ids: I) -> InsertRequest
where
    V: IntoIterator,
    V::Item: IntoIterator<Item = f32>,
    I: IntoIterator<Item = u32>,
{
    InsertRequest {
        data: float_arrays(vectors),
        ids: ids.into_iter().collect(),
    }
}

/// Build a `SearchRequest` for a batch of queries
pub fn search_request<V>(vectors: V, knbn: u32, ef: u32) -> SearchRequest
where
    V: IntoIterator,
    V::Item: IntoIterator<Item = f32>,
{
    SearchRequest {
        data: float_arrays(vectors),
        knbn,
        ef,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_request_example() {
        let request = insert_request(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![10, 11]);

        assert_eq!(
            request,
            InsertRequest {
                data: vec![
                    FloatArray { values: vec![1.0, 2.0] },
                    FloatArray { values: vec![3.0, 4.0] },
                ],
                ids: vec![10, 11],
            }
        );
    }

    #[test]
    fn test_search_request_example() {
        let request = search_request(vec![vec![1.0, 2.0]], 5, 50);

        assert_eq!(request.data, vec![FloatArray { values: vec![1.0, 2.0] }]);
        assert_eq!(request.knbn, 5);
        assert_eq!(request.ef, 50);
    }

    #[test]
    fn test_variable_length_vectors_keep_order() {
        let vectors: Vec<Vec<f32>> = vec![vec![0.5], vec![], vec![3.0, 2.0, 1.0]];
        let arrays = float_arrays(vectors.clone());

        let back: Vec<Vec<f32>> = arrays.into_iter().map(|a| a.values).collect();
        assert_eq!(back, vectors);
    }

    #[test]
    fn test_length_mismatch_is_not_corrected() {
        let request = insert_request(vec![vec![1.0_f32]], vec![1, 2, 3]);
        assert_eq!(request.data.len(), 1);
        assert_eq!(request.ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_accepts_arrays_and_iterators() {
        let request = search_request([[1.0_f32, 2.0], [3.0, 4.0]], 1, 16);
        assert_eq!(request.data[1].values, vec![3.0, 4.0]);

        let array = float_array((0..3).map(|i| i as f32));
        assert_eq!(array.values, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_marshaling_is_deterministic() {
        let first = insert_request(vec![vec![0.1_f32, 0.2]], vec![7]);
        let second = insert_request(vec![vec![0.1_f32, 0.2]], vec![7]);
        assert_eq!(first, second);
    }
}
