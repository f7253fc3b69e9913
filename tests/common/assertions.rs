use linear_flyer::StateSpaceModel;
use nalgebra::DMatrix;

/// Assert that every matrix of a model is finite and consistently shaped
#[track_caller]
pub fn assert_model_valid(model: &StateSpaceModel) {
    let n = model.state_dimension();
    let m = model.input_dimension();
    let matrices = model.matrices();

    assert_eq!(matrices.a.shape(), (n, n), "A must be n x n");
    assert_eq!(matrices.b.shape(), (n, m), "B must be n x m");
    assert!(
        matrices.a.iter().all(|x| x.is_finite()),
        "A contains non-finite values"
    );
    assert!(
        matrices.b.iter().all(|x| x.is_finite()),
        "B contains non-finite values"
    );
    assert_output_maps(model);
}

/// Assert that C is the identity and D is zero
#[track_caller]
pub fn assert_output_maps(model: &StateSpaceModel) {
    let n = model.state_dimension();
    let m = model.input_dimension();

    assert_eq!(*model.c(), DMatrix::<f64>::identity(n, n), "C must be identity");
    assert_eq!(*model.d(), DMatrix::<f64>::zeros(n, m), "D must be zero");
}
